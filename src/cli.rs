//! Command-line options for the autobuild binary
//!
//! Option parsing takes its error-reporting behavior as an argument instead
//! of reading any process-wide state.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::{LoaderConfig, DEFAULT_CONFIG_FILE};

/// autobuild
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "autobuild")]
#[command(about = "Read an autobuild configuration file and print its values")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Key that must be present (repeatable)
    #[arg(short, long = "require", value_name = "KEY")]
    pub required: Vec<String>,

    /// Maximum configuration file size in bytes (0 for unbounded)
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Keys to print; every entry is printed when none are given
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

impl Cli {
    /// Loader configuration implied by these options
    pub fn loader_config(&self) -> LoaderConfig {
        let builder = LoaderConfig::builder();
        match self.max_size {
            Some(max) => builder.max_size(max).build(),
            None => builder.build(),
        }
    }
}

/// Whether option errors are printed before being returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReporting {
    Print,
    Silent,
}

/// Outcome of a successful option parse
#[derive(Debug)]
pub enum ParsedOptions {
    /// Options to run with
    Run(Cli),
    /// Help or version text was requested; nothing else should happen
    Help(String),
}

/// Parse command-line arguments (including the program name)
pub fn parse_options<I, T>(args: I, reporting: ErrorReporting) -> Result<ParsedOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(ParsedOptions::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParsedOptions::Help(e.render().to_string()))
        }
        Err(e) => {
            if reporting == ErrorReporting::Print {
                eprintln!("Option Error: {}", error_summary(&e));
            }
            Err(e)
        }
    }
}

/// First line of a clap error without its `error: ` prefix
///
/// Clap's rendering adds tips and usage on following lines; the binary
/// reports a single diagnostic line.
pub fn error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
