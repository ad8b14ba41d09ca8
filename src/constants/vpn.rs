//! VPN service providers

use std::fmt;
use std::str::FromStr;
use serde::Serialize;

use crate::params::ParamsError;
use crate::params::defaults::VPNSP;

/// VPN service provider selected with `VPNSP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnProvider {
    Cyberghost,
    Mullvad,
    Nordvpn,
    #[serde(rename = "private internet access")]
    PrivateInternetAccess,
    Purevpn,
    Surfshark,
    Vyprvpn,
    Windscribe,
}

/// Values accepted in `VPNSP`
pub const VPN_PROVIDER_CHOICES: &[&str] = &[
    "cyberghost",
    "mullvad",
    "nordvpn",
    "private internet access",
    "purevpn",
    "surfshark",
    "vyprvpn",
    "windscribe",
];

impl VpnProvider {
    /// Value used in `VPNSP`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cyberghost => "cyberghost",
            Self::Mullvad => "mullvad",
            Self::Nordvpn => "nordvpn",
            Self::PrivateInternetAccess => "private internet access",
            Self::Purevpn => "purevpn",
            Self::Surfshark => "surfshark",
            Self::Vyprvpn => "vyprvpn",
            Self::Windscribe => "windscribe",
        }
    }
}

impl fmt::Display for VpnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VpnProvider {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyberghost" => Ok(Self::Cyberghost),
            "mullvad" => Ok(Self::Mullvad),
            "nordvpn" => Ok(Self::Nordvpn),
            "private internet access" => Ok(Self::PrivateInternetAccess),
            "purevpn" => Ok(Self::Purevpn),
            "surfshark" => Ok(Self::Surfshark),
            "vyprvpn" => Ok(Self::Vyprvpn),
            "windscribe" => Ok(Self::Windscribe),
            _ => Err(ParamsError::InvalidChoice {
                key: VPNSP.to_string(),
                value: s.to_string(),
                choices: VPN_PROVIDER_CHOICES.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_round_trip_through_from_str() {
        for choice in VPN_PROVIDER_CHOICES {
            let provider = VpnProvider::from_str(choice).expect("every choice parses");
            assert_eq!(provider.as_str(), *choice);
        }
    }

    #[test]
    fn test_unknown_provider() {
        let err = VpnProvider::from_str("PIA").unwrap_err();
        assert!(matches!(err, ParamsError::InvalidChoice { ref value, .. } if value == "PIA"));
    }
}
