//! DNS settings readers

use std::net::IpAddr;
use std::time::Duration;

use crate::constants::dot_provider_choices;
use crate::params::compat::AliasPolicy;
use crate::params::defaults::*;
use crate::params::error::Result;
use crate::params::reader::Reader;
use crate::params::source::{Options, ValueSource};
use crate::params::validator::ValidationRule;

/// `BLOCK_NSA` was renamed to `BLOCK_SURVEILLANCE`
pub const SURVEILLANCE_ALIAS: AliasPolicy = AliasPolicy::new(
    BLOCK_NSA,
    BLOCK_SURVEILLANCE,
    Options::with_default(BLOCK_SURVEILLANCE_DEFAULT),
);

impl<S: ValueSource> Reader<S> {
    /// Whether DNS over TLS is enabled, from `DOT`
    pub fn get_dns_over_tls(&self) -> Result<bool> {
        self.env().on_off(DOT, Options::with_default(DOT_DEFAULT))
    }

    /// DNS over TLS providers from `DOT_PROVIDERS`, in input order
    pub fn get_dns_over_tls_providers(&self) -> Result<Vec<String>> {
        self.env().csv_inside(
            DOT_PROVIDERS,
            &dot_provider_choices(),
            Options::with_default(DOT_PROVIDERS_DEFAULT),
        )
    }

    /// Unbound verbosity from `DOT_VERBOSITY`
    pub fn get_dns_over_tls_verbosity(&self) -> Result<u8> {
        self.u8_range(DOT_VERBOSITY, 0, 5, Options::with_default(DOT_VERBOSITY_DEFAULT))
    }

    /// Unbound verbosity details from `DOT_VERBOSITY_DETAILS`
    pub fn get_dns_over_tls_verbosity_details(&self) -> Result<u8> {
        self.u8_range(
            DOT_VERBOSITY_DETAILS,
            0,
            4,
            Options::with_default(DOT_VERBOSITY_DETAILS_DEFAULT),
        )
    }

    /// Unbound DNSSEC validation log level from `DOT_VALIDATION_LOGLEVEL`
    pub fn get_dns_over_tls_validation_log_level(&self) -> Result<u8> {
        self.u8_range(
            DOT_VALIDATION_LOGLEVEL,
            0,
            2,
            Options::with_default(DOT_VALIDATION_LOGLEVEL_DEFAULT),
        )
    }

    /// Block malicious hostnames and IPs, from `BLOCK_MALICIOUS`
    pub fn get_dns_malicious_blocking(&self) -> Result<bool> {
        self.env().on_off(BLOCK_MALICIOUS, Options::with_default(BLOCK_MALICIOUS_DEFAULT))
    }

    /// Block surveillance hostnames and IPs, from `BLOCK_SURVEILLANCE`
    ///
    /// `BLOCK_NSA` is still honored and records a deprecation warning.
    pub fn get_dns_surveillance_blocking(&mut self) -> Result<bool> {
        self.resolve_alias(&SURVEILLANCE_ALIAS, |env, key, options| env.on_off(key, options))
    }

    /// Block ads hostnames and IPs, from `BLOCK_ADS`
    pub fn get_dns_ads_blocking(&self) -> Result<bool> {
        self.env().on_off(BLOCK_ADS, Options::with_default(BLOCK_ADS_DEFAULT))
    }

    /// Hostnames to remove from block lists, from `UNBLOCK`
    pub fn get_dns_unblocked_hostnames(&self) -> Result<Vec<String>> {
        self.env().list(UNBLOCK, ValidationRule::HostnamePattern, Options::optional())
    }

    /// Unbound caching, from `DOT_CACHING`
    pub fn get_dns_over_tls_caching(&self) -> Result<bool> {
        self.env().on_off(DOT_CACHING, Options::with_default(DOT_CACHING_DEFAULT))
    }

    /// IPs and CIDR ranges Unbound refuses to return, from `DOT_PRIVATE_ADDRESS`
    pub fn get_dns_over_tls_private_addresses(&self) -> Result<Vec<String>> {
        self.env()
            .list(DOT_PRIVATE_ADDRESS, ValidationRule::IpOrCidr, Options::optional())
    }

    /// Resolve IPv6 addresses over DNS over TLS, from `DOT_IPV6`
    pub fn get_dns_over_tls_ipv6(&self) -> Result<bool> {
        self.env().on_off(DOT_IPV6, Options::with_default(DOT_IPV6_DEFAULT))
    }

    /// Block lists and cryptographic files update period, from `DNS_UPDATE_PERIOD`
    ///
    /// Zero disables periodic updates.
    pub fn get_dns_update_period(&self) -> Result<Duration> {
        self.env().duration(DNS_UPDATE_PERIOD, Options::with_default(DNS_UPDATE_PERIOD_DEFAULT))
    }

    /// Plaintext DNS server used when DNS over TLS is off, from `DNS_PLAINTEXT_ADDRESS`
    pub fn get_dns_plaintext(&self) -> Result<IpAddr> {
        self.env().ip(
            DNS_PLAINTEXT_ADDRESS,
            Options::with_default(DNS_PLAINTEXT_ADDRESS_DEFAULT),
        )
    }

    /// Keep the nameserver of /etc/resolv.conf, from `DNS_KEEP_NAMESERVER`
    pub fn get_dns_keep_nameserver(&self) -> Result<bool> {
        self.env().on_off(
            DNS_KEEP_NAMESERVER,
            Options::with_default(DNS_KEEP_NAMESERVER_DEFAULT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::params::ParamsError;

    fn reader_of(pairs: &[(&str, &str)]) -> Reader<HashMap<String, String>> {
        Reader::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_defaults() {
        let mut reader = reader_of(&[]);

        assert!(reader.get_dns_over_tls().unwrap());
        assert_eq!(reader.get_dns_over_tls_providers().unwrap(), vec!["cloudflare"]);
        assert_eq!(reader.get_dns_over_tls_verbosity().unwrap(), 1);
        assert_eq!(reader.get_dns_over_tls_verbosity_details().unwrap(), 0);
        assert_eq!(reader.get_dns_over_tls_validation_log_level().unwrap(), 0);
        assert!(reader.get_dns_malicious_blocking().unwrap());
        assert!(!reader.get_dns_surveillance_blocking().unwrap());
        assert!(!reader.get_dns_ads_blocking().unwrap());
        assert!(reader.get_dns_unblocked_hostnames().unwrap().is_empty());
        assert!(reader.get_dns_over_tls_caching().unwrap());
        assert!(reader.get_dns_over_tls_private_addresses().unwrap().is_empty());
        assert!(!reader.get_dns_over_tls_ipv6().unwrap());
        assert_eq!(reader.get_dns_update_period().unwrap(), Duration::from_secs(86400));
        assert_eq!(reader.get_dns_plaintext().unwrap(), "1.1.1.1".parse::<IpAddr>().unwrap());
        assert!(!reader.get_dns_keep_nameserver().unwrap());
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn test_providers() {
        let reader = reader_of(&[("DOT_PROVIDERS", "cloudflare,google")]);
        assert_eq!(reader.get_dns_over_tls_providers().unwrap(), vec!["cloudflare", "google"]);

        let reader = reader_of(&[("DOT_PROVIDERS", "cloudflare,notreal")]);
        match reader.get_dns_over_tls_providers().unwrap_err() {
            ParamsError::InvalidChoice { key, value, .. } => {
                assert_eq!(key, "DOT_PROVIDERS");
                assert_eq!(value, "notreal");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(reader_of(&[("DOT_VERBOSITY", "5")]).get_dns_over_tls_verbosity().unwrap(), 5);

        for value in ["6", "-1", "loud"] {
            let err = reader_of(&[("DOT_VERBOSITY", value)]).get_dns_over_tls_verbosity().unwrap_err();
            assert!(matches!(err, ParamsError::InvalidRange { .. }), "{:?} should be rejected", value);
        }
    }

    #[test]
    fn test_surveillance_alias() {
        let mut reader = reader_of(&[("BLOCK_NSA", "on")]);
        assert!(reader.get_dns_surveillance_blocking().unwrap());
        assert_eq!(reader.warnings().len(), 1);
        assert_eq!(reader.warnings()[0].replacement, "BLOCK_SURVEILLANCE");

        let mut reader = reader_of(&[("BLOCK_SURVEILLANCE", "on")]);
        assert!(reader.get_dns_surveillance_blocking().unwrap());
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn test_private_addresses() {
        let reader = reader_of(&[("DOT_PRIVATE_ADDRESS", "10.0.0.0/8,192.168.1.1")]);
        assert_eq!(
            reader.get_dns_over_tls_private_addresses().unwrap(),
            vec!["10.0.0.0/8", "192.168.1.1"]
        );

        let reader = reader_of(&[("DOT_PRIVATE_ADDRESS", "not-an-ip")]);
        assert!(matches!(
            reader.get_dns_over_tls_private_addresses().unwrap_err(),
            ParamsError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn test_plaintext_and_period() {
        let reader = reader_of(&[("DNS_PLAINTEXT_ADDRESS", "9.9.9.9"), ("DNS_UPDATE_PERIOD", "0")]);
        assert_eq!(reader.get_dns_plaintext().unwrap(), "9.9.9.9".parse::<IpAddr>().unwrap());
        assert_eq!(reader.get_dns_update_period().unwrap(), Duration::ZERO);

        let reader = reader_of(&[("DNS_PLAINTEXT_ADDRESS", "one.one.one.one")]);
        assert!(reader.get_dns_plaintext().is_err());
    }
}
