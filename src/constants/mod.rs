//! Fixed tables the settings are validated against
//!
//! DNS over TLS providers, VPN service providers and the Cyberghost server
//! groups and regions.

pub mod cyberghost;
pub mod dns;
pub mod vpn;

pub use dns::{dot_provider, dot_provider_choices, DotProvider, DOT_PROVIDERS};
pub use vpn::{VpnProvider, VPN_PROVIDER_CHOICES};
