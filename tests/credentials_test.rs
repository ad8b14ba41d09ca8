//! Credential resolution tests
//!
//! Real OpenSSL generated keys and certificates read from secret files,
//! variables and fallback files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::x509::{X509Builder, X509NameBuilder, X509};

use gateway_params::crypto::{describe_certificate, key_matches_certificate};
use gateway_params::params::PemKind;
use gateway_params::settings::AllSettings;
use gateway_params::{ParamsError, Reader};

fn generate() -> (PKey<Private>, X509) {
    let key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, "cyberghost-client").unwrap();
    let name = name.build();

    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    let serial = BigNum::from_u32(7).unwrap().to_asn1_integer().unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&key).unwrap();
    builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
    builder.set_not_after(&Asn1Time::days_from_now(30).unwrap()).unwrap();
    builder.sign(&key, MessageDigest::sha256()).unwrap();

    (key, builder.build())
}

fn reader_of(pairs: &[(&str, &str)], dir: &Path) -> Reader<HashMap<String, String>> {
    let map = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    Reader::new(map)
        .with_secrets_dir(dir.join("secrets"))
        .with_credential_files(dir.join("client.key"), dir.join("client.crt"))
}

#[test]
fn test_credentials_from_secret_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let secrets = dir.path().join("secrets");
    fs::create_dir(&secrets).unwrap();

    let (key, cert) = generate();
    fs::write(secrets.join("openvpn_clientkey"), key.private_key_to_pem_pkcs8().unwrap()).unwrap();
    fs::write(secrets.join("openvpn_clientcrt"), cert.to_pem().unwrap()).unwrap();

    let mut reader = reader_of(&[("VPNSP", "cyberghost")], dir.path());
    let settings = AllSettings::read(&mut reader).expect("Credentials should resolve");
    let cyberghost = settings.cyberghost.expect("Cyberghost settings expected");

    assert_eq!(cyberghost.group, "Premium UDP Europe");
    assert!(cyberghost.regions.is_empty());

    // The payload is the DER of the block, base64 encoded on one line
    let expected = STANDARD.encode(cert.to_der().unwrap());
    assert_eq!(cyberghost.client_certificate.payload(), expected);
    assert!(!cyberghost.client_key.payload().contains('\n'));
    assert_eq!(cyberghost.client_key.kind(), PemKind::PrivateKey);

    assert!(key_matches_certificate(&cyberghost.client_key, &cyberghost.client_certificate).unwrap());
    let summary = describe_certificate(&cyberghost.client_certificate).unwrap();
    assert_eq!(summary.subject, "CN=cyberghost-client");
}

#[test]
fn test_secret_file_wins_over_variable() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let secrets = dir.path().join("secrets");
    fs::create_dir(&secrets).unwrap();

    let (key, cert) = generate();
    let (_, other_cert) = generate();
    fs::write(secrets.join("openvpn_clientcrt"), cert.to_pem().unwrap()).unwrap();

    let key_pem = String::from_utf8(key.private_key_to_pem_pkcs8().unwrap()).unwrap();
    let other_pem = String::from_utf8(other_cert.to_pem().unwrap()).unwrap();
    let mut reader = reader_of(
        &[
            ("VPNSP", "cyberghost"),
            ("OPENVPN_CLIENTKEY", &key_pem),
            ("OPENVPN_CLIENTCRT", &other_pem),
        ],
        dir.path(),
    );

    let cyberghost = AllSettings::read(&mut reader).unwrap().cyberghost.unwrap();
    assert_eq!(
        cyberghost.client_certificate.to_der(),
        cert.to_der().unwrap(),
        "Secret file should be used before the variable"
    );
    assert_eq!(
        cyberghost.client_key.to_der(),
        key.private_key_to_pkcs8().unwrap()
    );
}

#[test]
fn test_secret_file_override_and_fallback_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (key, cert) = generate();

    let custom = dir.path().join("custom.crt");
    fs::write(&custom, cert.to_pem().unwrap()).unwrap();
    fs::write(dir.path().join("client.key"), key.private_key_to_pem_pkcs8().unwrap()).unwrap();

    let custom_path = custom.to_string_lossy().to_string();
    let mut reader = reader_of(
        &[("VPNSP", "cyberghost"), ("OPENVPN_CLIENTCRT_SECRETFILE", &custom_path)],
        dir.path(),
    );

    let cyberghost = AllSettings::read(&mut reader).unwrap().cyberghost.unwrap();
    assert_eq!(cyberghost.client_certificate.to_der(), cert.to_der().unwrap());
    assert_eq!(cyberghost.client_key.to_der(), key.private_key_to_pkcs8().unwrap());
}

#[test]
fn test_pem_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (key, cert) = generate();
    fs::write(dir.path().join("client.key"), key.private_key_to_pem_pkcs8().unwrap()).unwrap();
    fs::write(dir.path().join("client.crt"), cert.to_pem().unwrap()).unwrap();

    let mut reader = reader_of(&[("VPNSP", "cyberghost")], dir.path());
    let cyberghost = AllSettings::read(&mut reader).unwrap().cyberghost.unwrap();

    // Re-wrapping the payload yields a block OpenSSL parses to the same certificate
    let restored = X509::from_pem(cyberghost.client_certificate.to_pem().as_bytes()).unwrap();
    assert_eq!(restored.to_der().unwrap(), cert.to_der().unwrap());
}

#[test]
fn test_certificate_in_key_slot_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (_, cert) = generate();
    let cert_pem = String::from_utf8(cert.to_pem().unwrap()).unwrap();

    let mut reader = reader_of(
        &[("VPNSP", "cyberghost"), ("OPENVPN_CLIENTKEY", &cert_pem)],
        dir.path(),
    );

    let err = AllSettings::read(&mut reader).unwrap_err();
    assert!(matches!(err, ParamsError::PemDecodeFailure { ref key, .. } if key == "OPENVPN_CLIENTKEY"));
}

#[test]
fn test_json_output_hides_client_key() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (key, cert) = generate();
    fs::write(dir.path().join("client.key"), key.private_key_to_pem_pkcs8().unwrap()).unwrap();
    fs::write(dir.path().join("client.crt"), cert.to_pem().unwrap()).unwrap();

    let mut reader = reader_of(&[("VPNSP", "cyberghost"), ("REGION", "Germany,Romania")], dir.path());
    let settings = AllSettings::read(&mut reader).unwrap();
    let cyberghost = settings.cyberghost.as_ref().unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    assert!(!json.contains(cyberghost.client_key.payload()));
    assert!(json.contains(cyberghost.client_certificate.payload()));
    assert!(json.contains("Romania"));
    assert!(!format!("{:?}", cyberghost).contains(cyberghost.client_key.payload()));
}
