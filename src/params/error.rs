//! Settings resolution errors
//!
//! Every variant names the setting key and, where there is one, the raw
//! value that was rejected.

use thiserror::Error;

/// Error raised while resolving a single setting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// A compulsory setting has no value
    #[error("environment variable {key} is required but not set")]
    MissingRequiredValue {
        /// Setting key
        key: String,
    },

    /// A value (or one CSV token) is not in the allowed set
    #[error("value {value:?} for {key} is not valid, possible values are: {}", .choices.join(", "))]
    InvalidChoice {
        /// Setting key
        key: String,
        /// Rejected token
        value: String,
        /// Allowed values
        choices: Vec<String>,
    },

    /// A value is not an integer inside the inclusive range
    #[error("value {value:?} for {key} must be an integer between {min} and {max}")]
    InvalidRange {
        /// Setting key
        key: String,
        /// Raw value
        value: String,
        /// Lower bound, inclusive
        min: i64,
        /// Upper bound, inclusive
        max: i64,
    },

    /// A value does not have the expected shape
    #[error("value {value:?} for {key} is not valid: {reason}")]
    InvalidFormat {
        /// Setting key
        key: String,
        /// Rejected value or token
        value: String,
        /// What was expected
        reason: String,
    },

    /// No usable PEM block in a credential
    #[error("cannot decode PEM block from {key}: {reason}")]
    PemDecodeFailure {
        /// Setting key
        key: String,
        /// Decoding failure detail
        reason: String,
    },

    /// Both the deprecated and the canonical key are set to different values
    #[error("{deprecated} and {replacement} are both set with different values, please only set {replacement}")]
    DeprecatedVariableConflict {
        /// Deprecated key
        deprecated: String,
        /// Canonical key
        replacement: String,
    },
}

impl ParamsError {
    /// Key of the setting that failed
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequiredValue { key }
            | Self::InvalidChoice { key, .. }
            | Self::InvalidRange { key, .. }
            | Self::InvalidFormat { key, .. }
            | Self::PemDecodeFailure { key, .. } => key,
            Self::DeprecatedVariableConflict { replacement, .. } => replacement,
        }
    }

    pub(crate) fn invalid_format(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings resolution
pub type Result<T> = std::result::Result<T, ParamsError>;
