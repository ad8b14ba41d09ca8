//! DNS settings group

use std::net::IpAddr;
use std::time::Duration;
use log::info;
use serde::Serialize;

use crate::params::{Reader, Result, ValueSource};
use super::{serialize_duration, SettingsLogger};

/// How the gateway resolves names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DnsResolution {
    /// Local Unbound forwarding over TLS
    OverTls(DnsOverTlsSettings),
    /// Plain DNS to a single server
    Plaintext {
        /// DNS server address
        address: IpAddr,
    },
}

/// Unbound DNS over TLS settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsOverTlsSettings {
    pub providers: Vec<String>,
    pub verbosity: u8,
    pub verbosity_details: u8,
    pub validation_log_level: u8,
    pub block_malicious: bool,
    pub block_surveillance: bool,
    pub block_ads: bool,
    pub unblocked_hostnames: Vec<String>,
    pub caching: bool,
    pub private_addresses: Vec<String>,
    pub ipv6: bool,
    /// Zero disables periodic updates
    #[serde(serialize_with = "serialize_duration")]
    pub update_period: Duration,
}

/// DNS settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSettings {
    pub resolution: DnsResolution,
    /// Keep the nameserver of /etc/resolv.conf
    pub keep_nameserver: bool,
}

impl DnsOverTlsSettings {
    /// Read every DNS over TLS setting
    pub fn read<S: ValueSource>(reader: &mut Reader<S>) -> Result<Self> {
        Ok(Self {
            providers: reader.get_dns_over_tls_providers()?,
            verbosity: reader.get_dns_over_tls_verbosity()?,
            verbosity_details: reader.get_dns_over_tls_verbosity_details()?,
            validation_log_level: reader.get_dns_over_tls_validation_log_level()?,
            block_malicious: reader.get_dns_malicious_blocking()?,
            block_surveillance: reader.get_dns_surveillance_blocking()?,
            block_ads: reader.get_dns_ads_blocking()?,
            unblocked_hostnames: reader.get_dns_unblocked_hostnames()?,
            caching: reader.get_dns_over_tls_caching()?,
            private_addresses: reader.get_dns_over_tls_private_addresses()?,
            ipv6: reader.get_dns_over_tls_ipv6()?,
            update_period: reader.get_dns_update_period()?,
        })
    }
}

impl DnsSettings {
    /// Read the DNS settings
    ///
    /// With DNS over TLS off only the plaintext address and the keep
    /// nameserver flag are read.
    pub fn read<S: ValueSource>(reader: &mut Reader<S>) -> Result<Self> {
        let resolution = if reader.get_dns_over_tls()? {
            DnsResolution::OverTls(DnsOverTlsSettings::read(reader)?)
        } else {
            DnsResolution::Plaintext {
                address: reader.get_dns_plaintext()?,
            }
        };

        Ok(Self {
            resolution,
            keep_nameserver: reader.get_dns_keep_nameserver()?,
        })
    }

    /// DNS over TLS settings when enabled
    pub fn over_tls(&self) -> Option<&DnsOverTlsSettings> {
        match &self.resolution {
            DnsResolution::OverTls(settings) => Some(settings),
            DnsResolution::Plaintext { .. } => None,
        }
    }
}

impl SettingsLogger for DnsSettings {
    fn log(&self) {
        info!("DNS Settings:");
        match &self.resolution {
            DnsResolution::OverTls(dot) => {
                info!("  DNS over TLS providers: {}", dot.providers.join(", "));
                info!(
                    "  Verbosity: {} (details {}, validation {})",
                    dot.verbosity, dot.verbosity_details, dot.validation_log_level
                );
                info!("  Block malicious: {}", dot.block_malicious);
                info!("  Block surveillance: {}", dot.block_surveillance);
                info!("  Block ads: {}", dot.block_ads);
                if !dot.unblocked_hostnames.is_empty() {
                    info!("  Unblocked hostnames: {}", dot.unblocked_hostnames.join(", "));
                }
                info!("  Caching: {}", dot.caching);
                if !dot.private_addresses.is_empty() {
                    info!("  Private addresses: {}", dot.private_addresses.join(", "));
                }
                info!("  IPv6: {}", dot.ipv6);
                if dot.update_period.is_zero() {
                    info!("  Update period: disabled");
                } else {
                    info!("  Update period: {}", humantime::format_duration(dot.update_period));
                }
            }
            DnsResolution::Plaintext { address } => {
                info!("  DNS over TLS: disabled");
                info!("  Plaintext address: {}", address);
            }
        }
        info!("  Keep nameserver: {}", self.keep_nameserver);
    }
}
