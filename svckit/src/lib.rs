pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

pub use errors::{DashError, DashResult};
