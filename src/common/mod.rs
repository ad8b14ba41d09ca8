//! Common module
//!
//! Shared error type, logging setup and file helpers.

pub mod error;
pub mod fs;
pub mod log;

// Re-export commonly used types and functions
pub use error::{GatewayError, Result};
pub use log::init_logger;
