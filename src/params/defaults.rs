//! Setting keys and default values
//!
//! Single source of truth for the environment variable names read by the
//! gateway and the raw default each one falls back to.

/// Default directory holding secret files
pub const DEFAULT_SECRETS_DIR: &str = "/run/secrets";

/// Suffix of the variable overriding a secret file path, e.g. `OPENVPN_CLIENTKEY_SECRETFILE`
pub const SECRET_FILE_SUFFIX: &str = "_SECRETFILE";

// --- DNS ---

/// DNS over TLS on/off
pub const DOT: &str = "DOT";
/// DNS over TLS providers
pub const DOT_PROVIDERS: &str = "DOT_PROVIDERS";
/// Unbound verbosity
pub const DOT_VERBOSITY: &str = "DOT_VERBOSITY";
/// Unbound verbosity details
pub const DOT_VERBOSITY_DETAILS: &str = "DOT_VERBOSITY_DETAILS";
/// Unbound validation log level
pub const DOT_VALIDATION_LOGLEVEL: &str = "DOT_VALIDATION_LOGLEVEL";
/// Block malicious hostnames
pub const BLOCK_MALICIOUS: &str = "BLOCK_MALICIOUS";
/// Block surveillance hostnames
pub const BLOCK_SURVEILLANCE: &str = "BLOCK_SURVEILLANCE";
/// Deprecated name of [`BLOCK_SURVEILLANCE`]
pub const BLOCK_NSA: &str = "BLOCK_NSA";
/// Block ads hostnames
pub const BLOCK_ADS: &str = "BLOCK_ADS";
/// Hostnames removed from block lists
pub const UNBLOCK: &str = "UNBLOCK";
/// Unbound caching
pub const DOT_CACHING: &str = "DOT_CACHING";
/// Private addresses Unbound refuses to return
pub const DOT_PRIVATE_ADDRESS: &str = "DOT_PRIVATE_ADDRESS";
/// Resolve IPv6 over DNS over TLS
pub const DOT_IPV6: &str = "DOT_IPV6";
/// Block list and Unbound restart period
pub const DNS_UPDATE_PERIOD: &str = "DNS_UPDATE_PERIOD";
/// Plaintext DNS server used when DNS over TLS is off
pub const DNS_PLAINTEXT_ADDRESS: &str = "DNS_PLAINTEXT_ADDRESS";
/// Keep the nameserver from /etc/resolv.conf
pub const DNS_KEEP_NAMESERVER: &str = "DNS_KEEP_NAMESERVER";

pub const DOT_DEFAULT: &str = "on";
pub const DOT_PROVIDERS_DEFAULT: &str = "cloudflare";
pub const DOT_VERBOSITY_DEFAULT: &str = "1";
pub const DOT_VERBOSITY_DETAILS_DEFAULT: &str = "0";
pub const DOT_VALIDATION_LOGLEVEL_DEFAULT: &str = "0";
pub const BLOCK_MALICIOUS_DEFAULT: &str = "on";
pub const BLOCK_SURVEILLANCE_DEFAULT: &str = "off";
pub const BLOCK_ADS_DEFAULT: &str = "off";
pub const DOT_CACHING_DEFAULT: &str = "on";
pub const DOT_IPV6_DEFAULT: &str = "off";
pub const DNS_UPDATE_PERIOD_DEFAULT: &str = "24h";
pub const DNS_PLAINTEXT_ADDRESS_DEFAULT: &str = "1.1.1.1";
pub const DNS_KEEP_NAMESERVER_DEFAULT: &str = "off";

// --- VPN provider ---

/// VPN service provider
pub const VPNSP: &str = "VPNSP";
pub const VPNSP_DEFAULT: &str = "private internet access";

/// Cyberghost server group
pub const CYBERGHOST_GROUP: &str = "CYBERGHOST_GROUP";
pub const CYBERGHOST_GROUP_DEFAULT: &str = "Premium UDP Europe";
/// Server regions, comma separated
pub const REGION: &str = "REGION";

/// OpenVPN client private key
pub const OPENVPN_CLIENTKEY: &str = "OPENVPN_CLIENTKEY";
/// OpenVPN client certificate
pub const OPENVPN_CLIENTCRT: &str = "OPENVPN_CLIENTCRT";

/// Fallback file for [`OPENVPN_CLIENTKEY`]
pub const CLIENT_KEY_FILE: &str = "/gateway/client.key";
/// Fallback file for [`OPENVPN_CLIENTCRT`]
pub const CLIENT_CERTIFICATE_FILE: &str = "/gateway/client.crt";
