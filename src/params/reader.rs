//! Settings reader
//!
//! [`Reader`] owns a value source and resolves one setting per call. Readers
//! for each domain live in their own module (`dns`, `cyberghost`) as
//! additional `impl` blocks. Deprecation warnings are collected on the
//! reader instead of being logged, the caller decides where they go.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use log::debug;

use crate::constants::{VpnProvider, VPN_PROVIDER_CHOICES};
use crate::params::compat::{AliasPolicy, DeprecationWarning};
use crate::params::defaults::{CLIENT_CERTIFICATE_FILE, CLIENT_KEY_FILE, VPNSP, VPNSP_DEFAULT};
use crate::params::error::{ParamsError, Result};
use crate::params::source::{Env, Options, ProcessEnv, ValueSource};

/// Reads and validates settings from a [`ValueSource`]
#[derive(Debug)]
pub struct Reader<S = ProcessEnv> {
    env: Env<S>,
    client_key_file: PathBuf,
    client_certificate_file: PathBuf,
    warnings: Vec<DeprecationWarning>,
}

impl Reader<ProcessEnv> {
    /// Reader over the process environment
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: ValueSource> Reader<S> {
    /// Reader over `source`, with default secret and credential locations
    pub fn new(source: S) -> Self {
        Self {
            env: Env::new(source),
            client_key_file: PathBuf::from(CLIENT_KEY_FILE),
            client_certificate_file: PathBuf::from(CLIENT_CERTIFICATE_FILE),
            warnings: Vec::new(),
        }
    }

    /// Read secret files from `dir`
    pub fn with_secrets_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.env = self.env.with_secrets_dir(dir);
        self
    }

    /// Fallback files for the OpenVPN client key and certificate
    pub fn with_credential_files<P: AsRef<Path>>(mut self, key: P, certificate: P) -> Self {
        self.client_key_file = key.as_ref().to_path_buf();
        self.client_certificate_file = certificate.as_ref().to_path_buf();
        self
    }

    /// Policy-aware access to the source
    pub fn env(&self) -> &Env<S> {
        &self.env
    }

    pub(crate) fn client_key_file(&self) -> &Path {
        &self.client_key_file
    }

    pub(crate) fn client_certificate_file(&self) -> &Path {
        &self.client_certificate_file
    }

    /// Deprecation warnings collected so far
    pub fn warnings(&self) -> &[DeprecationWarning] {
        &self.warnings
    }

    /// Drain the collected deprecation warnings
    pub fn take_warnings(&mut self) -> Vec<DeprecationWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Resolve a renamed setting, recording its warning if any
    pub fn resolve_alias<T, F>(&mut self, policy: &AliasPolicy, read: F) -> Result<T>
    where
        F: Fn(&Env<S>, &str, Options) -> Result<T>,
    {
        let resolved = policy.resolve(&self.env, read)?;
        if let Some(warning) = resolved.warning {
            self.warnings.push(warning);
        }
        Ok(resolved.value)
    }

    /// Integer inside `[min, max]` narrowed to `u8`
    pub(crate) fn u8_range(&self, key: &str, min: u8, max: u8, options: Options) -> Result<u8> {
        let n = self.env.int_range(key, i64::from(min), i64::from(max), options)?;
        u8::try_from(n).map_err(|_| ParamsError::InvalidRange {
            key: key.to_string(),
            value: n.to_string(),
            min: i64::from(min),
            max: i64::from(max),
        })
    }

    /// VPN service provider from `VPNSP`
    pub fn get_vpn_provider(&self) -> Result<VpnProvider> {
        let name = self
            .env
            .inside(VPNSP, VPN_PROVIDER_CHOICES, Options::with_default(VPNSP_DEFAULT))?;
        debug!("VPN provider: {}", name);
        VpnProvider::from_str(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader_of(pairs: &[(&str, &str)]) -> Reader<HashMap<String, String>> {
        Reader::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_vpn_provider_default() {
        let reader = reader_of(&[]);
        assert_eq!(reader.get_vpn_provider().unwrap(), VpnProvider::PrivateInternetAccess);
    }

    #[test]
    fn test_vpn_provider_invalid() {
        let reader = reader_of(&[("VPNSP", "Cyberghost")]);
        let err = reader.get_vpn_provider().unwrap_err();
        assert!(matches!(err, ParamsError::InvalidChoice { ref value, .. } if value == "Cyberghost"));
    }

    #[test]
    fn test_take_warnings_drains() {
        let mut reader = reader_of(&[("OLD", "on")]);
        let policy = AliasPolicy::new("OLD", "NEW", Options::with_default("off"));

        let value = reader
            .resolve_alias(&policy, |env, key, options| env.on_off(key, options))
            .unwrap();
        assert!(value);
        assert_eq!(reader.warnings().len(), 1);

        let warnings = reader.take_warnings();
        assert_eq!(warnings[0].deprecated, "OLD");
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn test_u8_range() {
        let reader = reader_of(&[("LEVEL", "4")]);
        assert_eq!(reader.u8_range("LEVEL", 0, 4, Options::with_default("0")).unwrap(), 4);
        assert!(reader.u8_range("LEVEL", 0, 3, Options::with_default("0")).is_err());
    }
}
