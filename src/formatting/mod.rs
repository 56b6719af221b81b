//! Presentation helpers for primitive values

pub mod fixed;
pub mod passthrough;
pub mod union_data;
