//! DNS over TLS providers known to the resolver

use std::net::Ipv4Addr;

/// Upstream DNS over TLS provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotProvider {
    /// Identifier used in `DOT_PROVIDERS`
    pub name: &'static str,
    /// IPv4 addresses of the resolvers
    pub ips: &'static [Ipv4Addr],
    /// Hostname presented in the TLS certificate
    pub host: &'static str,
}

/// All known providers
pub const DOT_PROVIDERS: &[DotProvider] = &[
    DotProvider {
        name: "cloudflare",
        ips: &[Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(1, 0, 0, 1)],
        host: "cloudflare-dns.com",
    },
    DotProvider {
        name: "google",
        ips: &[Ipv4Addr::new(8, 8, 8, 8), Ipv4Addr::new(8, 8, 4, 4)],
        host: "dns.google",
    },
    DotProvider {
        name: "quad9",
        ips: &[Ipv4Addr::new(9, 9, 9, 9), Ipv4Addr::new(149, 112, 112, 112)],
        host: "dns.quad9.net",
    },
    DotProvider {
        name: "quadrant",
        ips: &[Ipv4Addr::new(12, 159, 2, 159)],
        host: "dns-tls.qis.io",
    },
    DotProvider {
        name: "cleanbrowsing",
        ips: &[Ipv4Addr::new(185, 228, 168, 9), Ipv4Addr::new(185, 228, 169, 9)],
        host: "security-filter-dns.cleanbrowsing.org",
    },
    DotProvider {
        name: "securedns",
        ips: &[Ipv4Addr::new(146, 185, 167, 43)],
        host: "dot.securedns.eu",
    },
    DotProvider {
        name: "libredns",
        ips: &[Ipv4Addr::new(116, 202, 176, 26)],
        host: "dot.libredns.gr",
    },
];

/// Provider named `name`, if known
pub fn dot_provider(name: &str) -> Option<&'static DotProvider> {
    DOT_PROVIDERS.iter().find(|provider| provider.name == name)
}

/// Names accepted in `DOT_PROVIDERS`
pub fn dot_provider_choices() -> Vec<&'static str> {
    DOT_PROVIDERS.iter().map(|provider| provider.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let cloudflare = dot_provider("cloudflare").expect("cloudflare is known");
        assert_eq!(cloudflare.host, "cloudflare-dns.com");
        assert!(dot_provider("Cloudflare").is_none(), "names are case sensitive");
        assert!(dot_provider("notreal").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = dot_provider_choices();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DOT_PROVIDERS.len());
    }
}
