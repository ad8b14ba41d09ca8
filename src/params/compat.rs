//! Retrocompatibility for renamed settings
//!
//! A renamed setting keeps honoring its deprecated key. When the deprecated
//! key is set it wins, is read as compulsory and a warning is recorded;
//! otherwise the canonical key is read with its own default. The resolver
//! never falls back from the deprecated branch to a default.

use std::fmt;
use log::debug;

use crate::params::error::{ParamsError, Result};
use crate::params::source::{Env, Options, ValueSource};

/// Deprecated key and the key replacing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Old key, still honored
    pub deprecated: &'static str,
    /// Canonical key
    pub replacement: &'static str,
    /// Policy for the canonical key
    pub options: Options,
}

/// Resolution state of an [`AliasPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasState {
    /// Nothing read yet
    Unset,
    /// The deprecated key has a value
    DeprecatedPresent,
    /// Only the canonical key is considered
    CanonicalOnly,
}

/// Warning recorded when a deprecated key is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationWarning {
    /// Old key that was used
    pub deprecated: String,
    /// Key to use instead
    pub replacement: String,
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You are using the old environment variable {}, please consider changing it to {}",
            self.deprecated, self.replacement
        )
    }
}

/// Outcome of resolving an alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Typed value
    pub value: T,
    /// Terminal state reached
    pub state: AliasState,
    /// Set when the deprecated key was used
    pub warning: Option<DeprecationWarning>,
}

impl AliasPolicy {
    /// Policy reading `replacement` with `options` unless `deprecated` is set
    pub const fn new(deprecated: &'static str, replacement: &'static str, options: Options) -> Self {
        Self {
            deprecated,
            replacement,
            options,
        }
    }

    /// Move out of [`AliasState::Unset`] by looking at the deprecated key
    ///
    /// # Errors
    ///
    /// [`ParamsError::DeprecatedVariableConflict`] when both keys are set to
    /// different raw values.
    pub fn detect<S: ValueSource>(&self, env: &Env<S>) -> Result<AliasState> {
        let deprecated = env.get(self.deprecated, Options::optional())?;
        if deprecated.is_empty() {
            return Ok(AliasState::CanonicalOnly);
        }

        let canonical = env.get(self.replacement, Options::optional())?;
        if !canonical.is_empty() && canonical != deprecated {
            return Err(ParamsError::DeprecatedVariableConflict {
                deprecated: self.deprecated.to_string(),
                replacement: self.replacement.to_string(),
            });
        }

        Ok(AliasState::DeprecatedPresent)
    }

    /// Resolve the setting, `read` being the typed getter for both keys
    ///
    /// In the deprecated branch `read` is called with a compulsory policy,
    /// so a value that disappeared since [`AliasPolicy::detect`] fails with
    /// [`ParamsError::MissingRequiredValue`].
    pub fn resolve<S, T, F>(&self, env: &Env<S>, read: F) -> Result<Resolved<T>>
    where
        S: ValueSource,
        F: Fn(&Env<S>, &str, Options) -> Result<T>,
    {
        let state = self.detect(env)?;
        debug!("{} alias state: {:?}", self.replacement, state);

        match state {
            AliasState::DeprecatedPresent => {
                let value = read(env, self.deprecated, Options::compulsory())?;
                Ok(Resolved {
                    value,
                    state,
                    warning: Some(DeprecationWarning {
                        deprecated: self.deprecated.to_string(),
                        replacement: self.replacement.to_string(),
                    }),
                })
            }
            AliasState::CanonicalOnly | AliasState::Unset => {
                let value = read(env, self.replacement, self.options)?;
                Ok(Resolved {
                    value,
                    state: AliasState::CanonicalOnly,
                    warning: None,
                })
            }
        }
    }
}
