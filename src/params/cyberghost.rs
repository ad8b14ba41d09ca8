//! Cyberghost settings readers

use crate::constants::cyberghost::{CYBERGHOST_GROUPS, CYBERGHOST_REGIONS};
use crate::params::defaults::{
    CYBERGHOST_GROUP, CYBERGHOST_GROUP_DEFAULT, OPENVPN_CLIENTCRT, OPENVPN_CLIENTKEY, REGION,
};
use crate::params::error::Result;
use crate::params::pem::{self, ExtractedCredential, PemKind};
use crate::params::reader::Reader;
use crate::params::source::{Options, ValueSource};

impl<S: ValueSource> Reader<S> {
    /// Server group from `CYBERGHOST_GROUP`
    pub fn get_cyberghost_group(&self) -> Result<String> {
        self.env().inside(
            CYBERGHOST_GROUP,
            CYBERGHOST_GROUPS,
            Options::with_default(CYBERGHOST_GROUP_DEFAULT),
        )
    }

    /// Server regions from `REGION`; empty means any region
    pub fn get_cyberghost_regions(&self) -> Result<Vec<String>> {
        self.env().csv_inside(REGION, CYBERGHOST_REGIONS, Options::optional())
    }

    /// OpenVPN client key from the `OPENVPN_CLIENTKEY` secret file,
    /// variable, or fallback file
    pub fn get_cyberghost_client_key(&self) -> Result<ExtractedCredential> {
        let (raw, _) = self
            .env()
            .get_from_file_or_secret_file(OPENVPN_CLIENTKEY, Some(self.client_key_file()))?;
        pem::extract(OPENVPN_CLIENTKEY, &raw, PemKind::PrivateKey)
    }

    /// OpenVPN client certificate from the `OPENVPN_CLIENTCRT` secret file,
    /// variable, or fallback file
    pub fn get_cyberghost_client_certificate(&self) -> Result<ExtractedCredential> {
        let (raw, _) = self
            .env()
            .get_from_file_or_secret_file(OPENVPN_CLIENTCRT, Some(self.client_certificate_file()))?;
        pem::extract(OPENVPN_CLIENTCRT, &raw, PemKind::Certificate)
    }
}
