//! Parameter reading and validation
//!
//! This module turns raw environment variables and secret files into typed
//! values. It is organised leaves first:
//!
//! - [`source`]: where raw values come from, with default and compulsory policies
//! - [`validator`]: pure raw string to typed value checks
//! - [`pem`]: PEM credential extraction
//! - [`compat`]: renamed settings still honoring their deprecated key
//! - [`Reader`]: one method per setting, grouped by domain

pub mod compat;
pub mod defaults;
pub mod error;
pub mod pem;
pub mod source;
pub mod validator;

mod cyberghost;
mod dns;
mod reader;

pub use self::compat::{AliasPolicy, AliasState, DeprecationWarning};
pub use self::dns::SURVEILLANCE_ALIAS;
pub use self::error::{ParamsError, Result};
pub use self::pem::{ExtractedCredential, PemKind};
pub use self::reader::Reader;
pub use self::source::{Env, Options, Origin, ProcessEnv, ValueSource};
pub use self::validator::{ValidationRule, Value};
