//! Logging helpers
//!
//! Thin wrapper around `env_logger` so the binary and tests share one
//! initialisation path.

/// Initialise the global logger
///
/// `RUST_LOG` takes precedence over `level` when it is set.
///
/// # Parameters
///
/// * `level` - Fallback log filter, e.g. `info` or `debug`
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default()
        .filter_or("RUST_LOG", level);

    // A second initialisation (e.g. from another test) is not an error
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice() {
        init_logger("debug");
        init_logger("info");
    }
}
