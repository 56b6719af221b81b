//! Formatting and validation helpers for user-facing data, plus the small
//! greeting service shipped alongside them.

pub mod core;
pub mod formatting;
pub mod handlers;
pub mod models;
pub mod validation;

pub use formatting::fixed::to_fixed;
pub use formatting::passthrough::handle_data;
pub use formatting::union_data::{handle_union_data, UnionData};
pub use models::user::{determine_user_status, process_user_data, ProcessedUser, Role, User, UserStatus};
pub use validation::strings::{as_valid_string, is_valid_string, process_data, process_data_safe};
