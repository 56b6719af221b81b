pub mod config;
pub mod error;
pub mod routes;
pub mod tracing_init;
