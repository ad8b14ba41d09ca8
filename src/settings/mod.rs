//! Settings groups
//!
//! Aggregates of resolved settings handed to the gateway components. Each
//! group is read once, in a single pass, and is never mutated afterwards.
//! The first invalid setting aborts the whole read.

mod cyberghost;
mod dns;

pub use self::cyberghost::CyberghostSettings;
pub use self::dns::{DnsOverTlsSettings, DnsResolution, DnsSettings};

use std::time::Duration;
use log::info;
use serde::{Serialize, Serializer};

use crate::constants::VpnProvider;
use crate::params::{ExtractedCredential, Reader, Result, ValueSource};

/// Trait for logging a settings group
pub trait SettingsLogger {
    /// Log the settings at info level, without secrets
    fn log(&self);
}

/// Every setting the gateway needs to start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllSettings {
    pub vpn_provider: VpnProvider,
    pub dns: DnsSettings,
    /// Present when the provider is Cyberghost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyberghost: Option<CyberghostSettings>,
}

impl AllSettings {
    /// Read all settings in one pass
    pub fn read<S: ValueSource>(reader: &mut Reader<S>) -> Result<Self> {
        let vpn_provider = reader.get_vpn_provider()?;
        let dns = DnsSettings::read(reader)?;
        let cyberghost = match vpn_provider {
            VpnProvider::Cyberghost => Some(CyberghostSettings::read(reader)?),
            _ => None,
        };

        Ok(Self {
            vpn_provider,
            dns,
            cyberghost,
        })
    }
}

impl SettingsLogger for AllSettings {
    fn log(&self) {
        if !log::log_enabled!(log::Level::Info) {
            return;
        }

        info!("=== Settings ===");
        info!("VPN provider: {}", self.vpn_provider);
        self.dns.log();
        if let Some(cyberghost) = &self.cyberghost {
            cyberghost.log();
        }
        info!("================");
    }
}

pub(crate) fn serialize_duration<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&humantime::format_duration(*duration))
}

pub(crate) fn serialize_credential<S: Serializer>(
    credential: &ExtractedCredential,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(credential.payload())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_cyberghost_only_read_for_cyberghost() {
        // Invalid Cyberghost values are ignored for other providers
        let source: HashMap<String, String> = [("VPNSP", "mullvad"), ("CYBERGHOST_GROUP", "nope")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let dir = tempfile::tempdir().expect("temp dir");
        let mut reader = Reader::new(source).with_secrets_dir(dir.path());

        let settings = AllSettings::read(&mut reader).unwrap();
        assert_eq!(settings.vpn_provider, VpnProvider::Mullvad);
        assert!(settings.cyberghost.is_none());
    }

    #[test]
    fn test_duration_serialization() {
        let mut serializer = serde_json::Serializer::new(Vec::new());
        serialize_duration(&Duration::from_secs(90 * 60), &mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), b"\"1h 30m\"".to_vec());
    }
}
