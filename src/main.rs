//! Gateway Params Command Line Tool
//!
//! Resolves the gateway settings from the process environment, reports
//! deprecated variables and prints the result.

use clap::Parser;
use log::{error, info, warn};

use gateway_params::{AllSettings, Reader, SettingsLogger, VERSION, APP_NAME};
use gateway_params::common::{init_logger, Result};
use gateway_params::crypto::{describe_certificate, describe_private_key, key_matches_certificate};
use gateway_params::params::defaults::DEFAULT_SECRETS_DIR;

/// Gateway Params: validate the gateway settings
#[derive(Parser, Debug)]
#[clap(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Log level
    #[clap(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Directory holding secret files
    #[clap(long, env = "SECRETS_DIR", default_value = DEFAULT_SECRETS_DIR)]
    secrets_dir: String,

    /// Print the resolved settings as JSON on stdout
    #[clap(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    init_logger(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Starting {} v{}", APP_NAME, VERSION);

    let mut reader = Reader::from_process_env().with_secrets_dir(&args.secrets_dir);
    let settings = AllSettings::read(&mut reader)?;
    for warning in reader.take_warnings() {
        warn!("{}", warning);
    }

    settings.log();

    if let Some(cyberghost) = &settings.cyberghost {
        match describe_certificate(&cyberghost.client_certificate) {
            Ok(summary) => {
                info!("Client certificate subject: {}", summary.subject);
                info!("Client certificate fingerprint: {}", summary.fingerprint);
            }
            Err(e) => warn!("Unable to describe client certificate: {}", e),
        }

        match describe_private_key(&cyberghost.client_key) {
            Ok(summary) => info!("Client key: {} {} bits", summary.algorithm, summary.bits),
            Err(e) => warn!("Unable to describe client key: {}", e),
        }

        match key_matches_certificate(&cyberghost.client_key, &cyberghost.client_certificate) {
            Ok(true) => {}
            Ok(false) => warn!("Client key does not match the client certificate"),
            Err(e) => warn!("Unable to compare client key and certificate: {}", e),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    }

    info!("Settings are valid");
    Ok(())
}
