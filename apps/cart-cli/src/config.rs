//! # CLI Configuration
//!
//! Built from command line flags plus environment variables.
//!
//! ## Configuration Sources
//! 1. Flags (`--pretty`, `--check`, the input path)
//! 2. Environment variables (`CART_PRETTY`, `CART_LOG`, then `RUST_LOG`)
//! 3. Defaults (this file)

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Log filter used when neither `CART_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,cart_core=info,cart_cli=info";

pub const USAGE: &str = "\
Cart CSV parser

Usage: cart-csv [OPTIONS] <FILE>

Reads a cart CSV (header: Product name,Price,Quantity) and prints the
parsed items and total as JSON.

Options:
  -c, --check     Only validate; print the list of problems as JSON
  -p, --pretty    Pretty-print JSON output (env: CART_PRETTY)
  -h, --help      Show this help message

Environment:
  CART_LOG        Log filter (falls back to RUST_LOG)
";

/// What the binary should do with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the parsed cart.
    #[default]
    Parse,
    /// Print the validation problems only.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub mode: Mode,
    pub pretty: bool,
    pub log_filter: String,
}

/// Result of reading the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
}

impl CliConfig {
    /// Load configuration from `args` (program name excluded) and the process
    /// environment.
    pub fn load<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_sources(args, |key| env::var(key).ok())
    }

    /// Same as [`CliConfig::load`] with an explicit environment lookup.
    pub fn from_sources<I, E>(args: I, env: E) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut input = None;
        let mut mode = Mode::default();
        let mut pretty = match env("CART_PRETTY") {
            Some(value) => parse_bool("CART_PRETTY", &value)?,
            None => false,
        };

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--check" | "-c" => mode = Mode::Check,
                "--pretty" | "-p" => pretty = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                extra if input.is_some() => {
                    return Err(ConfigError::UnexpectedArgument(extra.to_string()));
                }
                path => input = Some(PathBuf::from(path)),
            }
        }

        let input = input.ok_or(ConfigError::MissingInput)?;
        let log_filter = env("CART_LOG")
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Command::Run(CliConfig {
            input,
            mode,
            pretty,
            log_filter,
        }))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
