//! Cryptography module
//!
//! OpenSSL backed inspection of the OpenVPN client credentials.

pub mod certificate;

// Re-export commonly used types and functions
pub use certificate::{
    describe_certificate, describe_private_key, key_matches_certificate, CertificateSummary,
    PrivateKeySummary,
};
