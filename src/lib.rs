//! Gateway Params: settings validation for a VPN and DNS gateway
//!
//! This library reads the gateway settings from environment variables and
//! secret files, validates every value against its rule and hands out typed,
//! immutable settings groups.
//!
//! # Main Features
//!
//! - Defaults, compulsory values and strict validation per setting
//! - Renamed settings keep honoring their deprecated variable with a warning
//! - Credentials read from secret files, variables or fallback files
//! - PEM client keys and certificates turned into inline base64 payloads
//!
//! # Example
//!
//! ```no_run
//! use gateway_params::{AllSettings, Reader, Result};
//!
//! fn main() -> Result<()> {
//!     let mut reader = Reader::from_process_env().with_secrets_dir("/run/secrets");
//!
//!     let settings = AllSettings::read(&mut reader)?;
//!     for warning in reader.take_warnings() {
//!         eprintln!("{}", warning);
//!     }
//!
//!     println!("VPN provider: {}", settings.vpn_provider);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod common;
pub mod constants;
pub mod crypto;
pub mod params;
pub mod settings;

// Re-export commonly used structures and functions for convenience
pub use common::{GatewayError, Result};
pub use params::{ParamsError, Reader};
pub use settings::{AllSettings, SettingsLogger};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
