//! Certificate and private key inspection
//!
//! Decodes extracted credentials with OpenSSL to report what they hold.
//! Nothing here is needed to resolve settings; it is used by the
//! diagnostic binary.

use openssl::hash::MessageDigest;
use openssl::pkey::{Id, PKey, Private};
use openssl::x509::X509;
use log::debug;
use serde::Serialize;

use crate::common::{GatewayError, Result};
use crate::params::{ExtractedCredential, PemKind};

/// What an OpenVPN client certificate holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateSummary {
    /// Subject entries as `CN=value, O=value`
    pub subject: String,
    /// SHA-256 fingerprint, colon separated lowercase hex
    pub fingerprint: String,
    /// Key algorithm of the certificate public key
    pub key_algorithm: String,
}

/// What an OpenVPN client private key holds, without the key material
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateKeySummary {
    pub algorithm: String,
    pub bits: u32,
}

fn expect_kind(credential: &ExtractedCredential, kind: PemKind) -> Result<()> {
    if credential.kind() != kind {
        return Err(GatewayError::Credential(format!(
            "expected a {} credential, got {}",
            kind,
            credential.kind()
        )));
    }
    Ok(())
}

fn parse_certificate(credential: &ExtractedCredential) -> Result<X509> {
    expect_kind(credential, PemKind::Certificate)?;
    X509::from_der(&credential.to_der())
        .map_err(|e| GatewayError::Credential(format!("Failed to parse certificate: {}", e)))
}

fn parse_private_key(credential: &ExtractedCredential) -> Result<PKey<Private>> {
    expect_kind(credential, PemKind::PrivateKey)?;
    PKey::private_key_from_der(&credential.to_der())
        .map_err(|e| GatewayError::Credential(format!("Failed to parse private key: {}", e)))
}

fn algorithm_name(id: Id) -> String {
    match id {
        Id::RSA => "RSA".to_string(),
        Id::EC => "EC".to_string(),
        Id::ED25519 => "Ed25519".to_string(),
        Id::ED448 => "Ed448".to_string(),
        Id::DSA => "DSA".to_string(),
        other => format!("unknown ({})", other.as_raw()),
    }
}

/// Describe a client certificate
///
/// # Errors
///
/// [`GatewayError::Credential`] when the credential is not a certificate or
/// does not hold a valid X.509 structure.
pub fn describe_certificate(credential: &ExtractedCredential) -> Result<CertificateSummary> {
    let cert = parse_certificate(credential)?;

    let subject = cert
        .subject_name()
        .entries()
        .map(|entry| {
            let name = entry.object().nid().short_name().unwrap_or("?");
            let value = entry
                .data()
                .as_utf8()
                .map(|s| s.to_string())
                .unwrap_or_default();
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let fingerprint = cert
        .digest(MessageDigest::sha256())?
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .join(":");

    let key_algorithm = algorithm_name(cert.public_key()?.id());
    debug!("Certificate {} has fingerprint {}", subject, fingerprint);

    Ok(CertificateSummary {
        subject,
        fingerprint,
        key_algorithm,
    })
}

/// Describe a client private key
///
/// # Errors
///
/// [`GatewayError::Credential`] when the credential is not a private key or
/// does not hold a valid PKCS#8 structure.
pub fn describe_private_key(credential: &ExtractedCredential) -> Result<PrivateKeySummary> {
    let key = parse_private_key(credential)?;
    Ok(PrivateKeySummary {
        algorithm: algorithm_name(key.id()),
        bits: key.bits(),
    })
}

/// Whether the private key belongs to the certificate
pub fn key_matches_certificate(
    key: &ExtractedCredential,
    certificate: &ExtractedCredential,
) -> Result<bool> {
    let key = parse_private_key(key)?;
    let cert = parse_certificate(certificate)?;
    Ok(cert.public_key()?.public_eq(&key))
}
