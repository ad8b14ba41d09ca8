//! Value sources
//!
//! This module defines where raw setting values come from: a key/value
//! lookup (the process environment, or a map in tests) plus secret files
//! for credential material. [`Env`] layers the default and compulsory
//! policies on top of a [`ValueSource`] and exposes typed getters that run
//! each raw value through its validator.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::debug;

use crate::common::fs::read_non_empty;
use crate::params::defaults::{DEFAULT_SECRETS_DIR, SECRET_FILE_SUFFIX};
use crate::params::error::{ParamsError, Result};
use crate::params::validator::{ValidationRule, Value};

/// Raw key/value lookup
#[cfg_attr(test, mockall::automock)]
pub trait ValueSource {
    /// Raw value for `key`, `None` when the key is not set at all
    ///
    /// # Errors
    ///
    /// [`ParamsError::InvalidFormat`] when the key is set but its value
    /// cannot be read as text.
    fn lookup(&self, key: &str) -> Result<Option<String>>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ParamsError::invalid_format(
                key,
                &raw.to_string_lossy(),
                "not valid UTF-8",
            )),
        }
    }
}

impl ValueSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}

/// Where a resolved raw value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Built-in default value
    Default,
    /// Environment variable
    Environment,
    /// Secret file (e.g. a Docker secret mount)
    SecretFile,
    /// Fallback credential file
    File,
    /// Not set, optional and without default
    Unset,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Default => write!(f, "default"),
            Origin::Environment => write!(f, "environment"),
            Origin::SecretFile => write!(f, "secret file"),
            Origin::File => write!(f, "file"),
            Origin::Unset => write!(f, "unset"),
        }
    }
}

/// Default and compulsory policy for a single read
///
/// Without any policy an absent or empty value resolves to the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    default: Option<&'static str>,
    compulsory: bool,
}

impl Options {
    /// Absent or empty resolves to the empty string
    pub const fn optional() -> Self {
        Self {
            default: None,
            compulsory: false,
        }
    }

    /// Absent or empty resolves to `value`
    pub const fn with_default(value: &'static str) -> Self {
        Self {
            default: Some(value),
            compulsory: false,
        }
    }

    /// Absent or empty is a [`ParamsError::MissingRequiredValue`]
    pub const fn compulsory() -> Self {
        Self {
            default: None,
            compulsory: true,
        }
    }

    /// Configured default, if any
    pub fn default_value(&self) -> Option<&'static str> {
        self.default
    }

    /// Whether absence is an error
    pub fn is_compulsory(&self) -> bool {
        self.compulsory
    }
}

/// Policy-aware reader over a [`ValueSource`]
#[derive(Debug, Clone)]
pub struct Env<S> {
    source: S,
    secrets_dir: PathBuf,
}

impl<S: ValueSource> Env<S> {
    /// Create a reader with the default secrets directory
    pub fn new(source: S) -> Self {
        Self {
            source,
            secrets_dir: PathBuf::from(DEFAULT_SECRETS_DIR),
        }
    }

    /// Use `dir` instead of the default secrets directory
    pub fn with_secrets_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.secrets_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Directory holding secret files
    pub fn secrets_dir(&self) -> &Path {
        &self.secrets_dir
    }

    /// Raw value of `key` after applying `options`
    ///
    /// # Errors
    ///
    /// [`ParamsError::MissingRequiredValue`] when the value is compulsory and
    /// absent or empty.
    pub fn get(&self, key: &str, options: Options) -> Result<String> {
        self.get_with_origin(key, options).map(|(value, _)| value)
    }

    /// Like [`Env::get`], also returning where the value came from
    pub fn get_with_origin(&self, key: &str, options: Options) -> Result<(String, Origin)> {
        let resolved = match self.source.lookup(key)? {
            Some(value) if !value.is_empty() => (value, Origin::Environment),
            _ => match options.default {
                Some(default) => (default.to_string(), Origin::Default),
                None if options.compulsory => {
                    return Err(ParamsError::MissingRequiredValue {
                        key: key.to_string(),
                    });
                }
                None => (String::new(), Origin::Unset),
            },
        };

        debug!("{} resolved from {}", key, resolved.1);
        Ok(resolved)
    }

    /// Path of the secret file for `key`
    ///
    /// `<KEY>_SECRETFILE` overrides the default `<secrets dir>/<key in lowercase>`.
    pub fn secret_file_path(&self, key: &str) -> Result<PathBuf> {
        let override_key = format!("{}{}", key, SECRET_FILE_SUFFIX);
        match self.source.lookup(&override_key)? {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(self.secrets_dir.join(key.to_lowercase())),
        }
    }

    /// Credential bytes for `key`
    ///
    /// Lookup order is the secret file, then the `key` environment variable,
    /// then `fallback_file` when given. Missing or unreadable files are
    /// skipped.
    ///
    /// # Errors
    ///
    /// [`ParamsError::MissingRequiredValue`] when no location has a value.
    pub fn get_from_file_or_secret_file(
        &self,
        key: &str,
        fallback_file: Option<&Path>,
    ) -> Result<(Vec<u8>, Origin)> {
        let secret_path = self.secret_file_path(key)?;
        if let Some(content) = read_non_empty(&secret_path) {
            debug!("{} resolved from secret file {}", key, secret_path.display());
            return Ok((content, Origin::SecretFile));
        }

        let (value, origin) = self.get_with_origin(key, Options::optional())?;
        if !value.is_empty() {
            return Ok((value.into_bytes(), origin));
        }

        if let Some(path) = fallback_file {
            if let Some(content) = read_non_empty(path) {
                debug!("{} resolved from file {}", key, path.display());
                return Ok((content, Origin::File));
            }
        }

        Err(ParamsError::MissingRequiredValue {
            key: key.to_string(),
        })
    }

    // --- Typed getters ---

    /// Raw value of `key` checked against `rule`
    pub fn validated(&self, key: &str, rule: ValidationRule<'_>, options: Options) -> Result<Value> {
        let value = self.get(key, options)?;
        rule.apply(key, &value)
    }

    fn typed<T>(
        &self,
        key: &str,
        rule: ValidationRule<'_>,
        options: Options,
        extract: fn(Value) -> Option<T>,
    ) -> Result<T> {
        let value = self.validated(key, rule, options)?;
        extract(value).ok_or_else(|| mismatch(key, rule))
    }

    /// `on`/`off` boolean
    pub fn on_off(&self, key: &str, options: Options) -> Result<bool> {
        self.typed(key, ValidationRule::OnOff, options, Value::into_bool)
    }

    /// Integer inside `[min, max]`
    pub fn int_range(&self, key: &str, min: i64, max: i64, options: Options) -> Result<i64> {
        self.typed(key, ValidationRule::Range { min, max }, options, Value::into_integer)
    }

    /// One value of `choices`
    pub fn inside(&self, key: &str, choices: &[&str], options: Options) -> Result<String> {
        self.typed(key, ValidationRule::Choice(choices), options, Value::into_text)
    }

    /// Comma separated values of `choices`; empty yields an empty list
    pub fn csv_inside(&self, key: &str, choices: &[&str], options: Options) -> Result<Vec<String>> {
        self.list(key, ValidationRule::CsvChoice(choices), options)
    }

    /// Comma separated list checked against `rule`; empty yields an empty list
    pub fn list(&self, key: &str, rule: ValidationRule<'_>, options: Options) -> Result<Vec<String>> {
        let value = self.get(key, options)?;
        if value.is_empty() {
            return Ok(Vec::new());
        }
        rule.apply(key, &value)?
            .into_list()
            .ok_or_else(|| mismatch(key, rule))
    }

    /// Duration such as `24h` or `1h30m`
    pub fn duration(&self, key: &str, options: Options) -> Result<Duration> {
        self.typed(key, ValidationRule::Duration, options, Value::into_duration)
    }

    /// IPv4 or IPv6 address
    pub fn ip(&self, key: &str, options: Options) -> Result<IpAddr> {
        self.typed(key, ValidationRule::IpAddress, options, Value::into_ip)
    }
}

fn mismatch(key: &str, rule: ValidationRule<'_>) -> ParamsError {
    ParamsError::invalid_format(key, "", format!("{:?} does not produce the requested type", rule))
}
