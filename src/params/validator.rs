//! Setting validators
//!
//! Each validator is a pure function from a raw string to a typed value.
//! The setting key is only used to build the error. [`ValidationRule`]
//! groups them as a closed set of tagged rules.

use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;
use ipnetwork::IpNetwork;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::error::{ParamsError, Result};
use crate::params::pem::{self, ExtractedCredential, PemKind};

/// Longest hostname accepted, in characters
pub const MAX_HOSTNAME_LENGTH: usize = 253;

// RFC 1123 labels: alphanumeric at both ends, hyphens inside, 63 chars max
static HOSTNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9])(\.([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]))*$",
    )
    .expect("hostname pattern should compile")
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:\d+\.?\d*|\.\d+)(?:ns|us|µs|ms|s|m|h))+$")
        .expect("duration pattern should compile")
});

static DURATION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.?\d*|\.\d+)(ns|us|µs|ms|s|m|h)").expect("duration token pattern should compile")
});

/// Validation rule applied to a raw setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule<'a> {
    /// Integer inside `[min, max]`
    Range {
        /// Lower bound, inclusive
        min: i64,
        /// Upper bound, inclusive
        max: i64,
    },
    /// One of the allowed values
    Choice(&'a [&'a str]),
    /// Comma separated allowed values
    CsvChoice(&'a [&'a str]),
    /// `on` or `off`
    OnOff,
    /// Duration such as `24h`
    Duration,
    /// IPv4 or IPv6 address
    IpAddress,
    /// Comma separated IP addresses or CIDR ranges
    IpOrCidr,
    /// Comma separated hostnames
    HostnamePattern,
    /// PEM block of the given kind
    PemBlock(PemKind),
}

/// Typed result of a [`ValidationRule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Duration(Duration),
    Ip(IpAddr),
    Text(String),
    List(Vec<String>),
    Credential(ExtractedCredential),
}

impl Value {
    pub fn into_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_duration(self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_ip(self) -> Option<IpAddr> {
        match self {
            Self::Ip(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn into_credential(self) -> Option<ExtractedCredential> {
        match self {
            Self::Credential(credential) => Some(credential),
            _ => None,
        }
    }
}

impl ValidationRule<'_> {
    /// Check `raw` for setting `key` against this rule
    pub fn apply(&self, key: &str, raw: &str) -> Result<Value> {
        match *self {
            Self::Range { min, max } => int_range(key, raw, min, max).map(Value::Integer),
            Self::Choice(choices) => choice(key, raw, choices).map(Value::Text),
            Self::CsvChoice(choices) => csv_choice(key, raw, choices).map(Value::List),
            Self::OnOff => on_off(key, raw).map(Value::Bool),
            Self::Duration => duration(key, raw).map(Value::Duration),
            Self::IpAddress => ip_address(key, raw).map(Value::Ip),
            Self::IpOrCidr => ip_or_cidr_list(key, raw).map(Value::List),
            Self::HostnamePattern => hostnames(key, raw).map(Value::List),
            Self::PemBlock(kind) => pem::extract(key, raw.as_bytes(), kind).map(Value::Credential),
        }
    }
}

/// `on` is true, `off` is false, nothing else is accepted
pub fn on_off(key: &str, value: &str) -> Result<bool> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ParamsError::invalid_format(key, value, "expected \"on\" or \"off\"")),
    }
}

/// Integer inside `[min, max]`
pub fn int_range(key: &str, value: &str, min: i64, max: i64) -> Result<i64> {
    match value.parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(ParamsError::InvalidRange {
            key: key.to_string(),
            value: value.to_string(),
            min,
            max,
        }),
    }
}

/// `value` must be exactly one of `choices`
pub fn choice(key: &str, value: &str, choices: &[&str]) -> Result<String> {
    if choices.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(ParamsError::InvalidChoice {
            key: key.to_string(),
            value: value.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
        })
    }
}

/// Every comma separated token of `value` must be one of `choices`
///
/// Tokens are not trimmed and keep their input order.
pub fn csv_choice(key: &str, value: &str, choices: &[&str]) -> Result<Vec<String>> {
    value.split(',').map(|token| choice(key, token, choices)).collect()
}

/// Duration made of number and unit pairs, e.g. `24h`, `1h30m`, `1.5h` or `500ms`
///
/// Units are `ns`, `us`, `µs`, `ms`, `s`, `m` and `h`; numbers may carry a
/// decimal fraction. A bare `0` is the zero duration.
pub fn duration(key: &str, value: &str) -> Result<Duration> {
    if value == "0" {
        return Ok(Duration::ZERO);
    }
    if !DURATION.is_match(value) {
        return Err(ParamsError::invalid_format(
            key,
            value,
            "not a duration, expected e.g. 24h, 1h30m or 500ms",
        ));
    }

    let out_of_range = || ParamsError::invalid_format(key, value, "duration out of range");
    let mut nanos: u128 = 0;
    for token in DURATION_TOKEN.captures_iter(value) {
        let per_unit = unit_nanos(&token[2]).ok_or_else(out_of_range)?;
        let (whole, fraction) = token[1].split_once('.').unwrap_or((&token[1], ""));

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        // Digits past nanosecond precision of an hour are irrelevant
        let fraction = &fraction[..fraction.len().min(18)];
        let scale = 10u128.pow(fraction.len() as u32);
        let fraction: u128 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| out_of_range())?
        };

        nanos = whole
            .checked_mul(per_unit)
            .and_then(|n| n.checked_add(fraction * per_unit / scale))
            .and_then(|n| nanos.checked_add(n))
            .ok_or_else(out_of_range)?;
    }

    let nanos = u64::try_from(nanos).map_err(|_| out_of_range())?;
    Ok(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

/// Textual IPv4 or IPv6 address
pub fn ip_address(key: &str, value: &str) -> Result<IpAddr> {
    IpAddr::from_str(value)
        .map_err(|_| ParamsError::invalid_format(key, value, "not an IP address"))
}

/// IP address or CIDR range; a bare address becomes a host network
pub fn ip_or_cidr(key: &str, value: &str) -> Result<IpNetwork> {
    if let Ok(ip) = IpAddr::from_str(value) {
        return Ok(IpNetwork::from(ip));
    }
    IpNetwork::from_str(value)
        .map_err(|_| ParamsError::invalid_format(key, value, "not a valid IP or CIDR range"))
}

/// Comma separated IP addresses or CIDR ranges, kept as written
pub fn ip_or_cidr_list(key: &str, value: &str) -> Result<Vec<String>> {
    value
        .split(',')
        .map(|token| ip_or_cidr(key, token).map(|_| token.to_string()))
        .collect()
}

/// Whether `value` looks like an RFC 1123 hostname
pub fn is_hostname(value: &str) -> bool {
    value.len() <= MAX_HOSTNAME_LENGTH && HOSTNAME.is_match(value)
}

/// Comma separated hostnames, failing on the first invalid one
pub fn hostnames(key: &str, value: &str) -> Result<Vec<String>> {
    value
        .split(',')
        .map(|token| {
            if is_hostname(token) {
                Ok(token.to_string())
            } else {
                Err(ParamsError::invalid_format(key, token, "hostname does not seem valid"))
            }
        })
        .collect()
}
