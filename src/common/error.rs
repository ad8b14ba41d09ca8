//! Error handling module
//!
//! This module defines the crate-level error type and result alias used by
//! the binary and the diagnostic helpers. Settings resolution errors live in
//! [`crate::params::ParamsError`] and convert into [`GatewayError`].

use thiserror::Error;
use std::io;

use crate::params::ParamsError;

/// Gateway settings error type
#[derive(Error, Debug)]
pub enum GatewayError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// OpenSSL error
    #[error("OpenSSL error: {0}")]
    Ssl(#[from] openssl::error::ErrorStack),

    /// Settings resolution error
    #[error("Settings error: {0}")]
    Params(#[from] ParamsError),

    /// Credential decoding error
    #[error("Credential error: {0}")]
    Credential(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `GatewayError`.
pub type Result<T> = std::result::Result<T, GatewayError>;
