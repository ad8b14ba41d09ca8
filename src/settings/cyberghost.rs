//! Cyberghost settings group

use log::info;
use serde::Serialize;

use crate::params::{ExtractedCredential, Reader, Result, ValueSource};
use super::{serialize_credential, SettingsLogger};

/// Cyberghost server selection and OpenVPN client credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CyberghostSettings {
    pub group: String,
    /// Empty means any region
    pub regions: Vec<String>,
    #[serde(skip)]
    pub client_key: ExtractedCredential,
    #[serde(serialize_with = "serialize_credential")]
    pub client_certificate: ExtractedCredential,
}

impl CyberghostSettings {
    /// Read the Cyberghost settings
    pub fn read<S: ValueSource>(reader: &mut Reader<S>) -> Result<Self> {
        Ok(Self {
            group: reader.get_cyberghost_group()?,
            regions: reader.get_cyberghost_regions()?,
            client_key: reader.get_cyberghost_client_key()?,
            client_certificate: reader.get_cyberghost_client_certificate()?,
        })
    }
}

impl SettingsLogger for CyberghostSettings {
    fn log(&self) {
        info!("Cyberghost Settings:");
        info!("  Group: {}", self.group);
        if self.regions.is_empty() {
            info!("  Regions: any");
        } else {
            info!("  Regions: {}", self.regions.join(", "));
        }
        info!("  Client key: [set]");
        info!("  Client certificate: {} base64 characters", self.client_certificate.payload().len());
    }
}
