//! autobuild binary
//!
//! Loads the configuration file, checks required keys and prints values.

use std::process::ExitCode;

use autobuild::cli::{parse_options, Cli, ErrorReporting, ParsedOptions};
use autobuild::{ConfigStore, Result};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let cli = match parse_options(std::env::args_os(), ErrorReporting::Print) {
        Ok(ParsedOptions::Run(cli)) => cli,
        Ok(ParsedOptions::Help(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(_) => return ExitCode::FAILURE,
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; stdout only carries requested values
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    tracing::debug!("autobuild v{}", autobuild::VERSION);

    let store = ConfigStore::open(&cli.config, &cli.loader_config())?;

    for key in &cli.required {
        store.require(key)?;
    }

    if cli.keys.is_empty() {
        for (key, value) in store.iter() {
            println!("{} = {}", key, value);
        }
    } else {
        for key in &cli.keys {
            println!("{} = {}", key, store.require(key)?);
        }
    }

    Ok(())
}
