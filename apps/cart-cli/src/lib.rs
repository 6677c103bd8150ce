//! # cart-cli Library
//!
//! Everything the `cart-csv` binary does, kept out of `main.rs` so it can be
//! tested.
//!
//! ## Module Organization
//! ```text
//! cart_cli/
//! ├── lib.rs          ◄─── You are here (run, logging setup)
//! ├── config.rs       ◄─── Flags + environment → CliConfig
//! ├── reader.rs       ◄─── FsReader (SourceReader over std::fs)
//! └── error.rs        ◄─── ConfigError, CliError
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Mode::Parse                         Mode::Check                        │
//! │  ───────────                         ───────────                        │
//! │  CartParser<FsReader>::parse         FsReader::read_to_string           │
//! │        │                                   │                            │
//! │        ▼                                   ▼                            │
//! │  ParseResult as JSON                 validate → Vec<ValidationError>    │
//! │        │                                   │                            │
//! │        ▼                                   ▼                            │
//! │  Outcome::Parsed                     Outcome::Valid / Invalid(n)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod reader;

use std::io::Write;
use std::process::ExitCode;

use cart_core::{validate, CartParser, SourceReader};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, Mode};
use error::CliError;
use reader::FsReader;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cart was parsed and printed.
    Parsed,
    /// Check mode found no problems.
    Valid,
    /// Check mode found this many problems.
    Invalid(usize),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Invalid(_))
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Processes `config.input` and writes JSON to `out`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<Outcome, CliError> {
    match config.mode {
        Mode::Parse => {
            let parser = CartParser::new(FsReader);
            let cart = parser.parse(&config.input)?;

            info!(
                path = %config.input.display(),
                items = cart.items.len(),
                quantity = cart.total_quantity(),
                total = %cart.total_money(),
                "parsed cart"
            );

            write_json(out, &cart, config.pretty)?;
            Ok(Outcome::Parsed)
        }
        Mode::Check => {
            let text = FsReader.read_to_string(&config.input)?;
            let errors = validate(&text);

            for err in &errors {
                warn!(path = %config.input.display(), %err, "invalid cart");
            }

            write_json(out, &errors, config.pretty)?;

            if errors.is_empty() {
                info!(path = %config.input.display(), "cart is valid");
                Ok(Outcome::Valid)
            } else {
                Ok(Outcome::Invalid(errors.len()))
            }
        }
    }
}

fn write_json<W, T>(out: &mut W, value: &T, pretty: bool) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only JSON.
///
/// ## Log Levels
/// - `CART_LOG=debug` - Show every validation problem and parse step
/// - Default: [`config::DEFAULT_LOG_FILTER`]
pub fn init_tracing(filter: &str) {
    let filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::CartError;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    fn cli_config(name: &str, mode: Mode) -> CliConfig {
        CliConfig {
            input: fixture(name),
            mode,
            pretty: false,
            log_filter: config::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn test_parse_sample_fixture() {
        let mut out = Vec::new();
        let outcome = run(&cli_config("sample_cart.csv", Mode::Parse), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Parsed);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3]["name"], "Mug, Ceramic");
        assert!(items.iter().all(|i| i["id"].as_str().is_some_and(|id| !id.is_empty())));

        let total = json["total"].as_f64().unwrap();
        assert!((total - 77.21).abs() < 0.005);
    }

    #[test]
    fn test_parse_invalid_fixture_fails() {
        let mut out = Vec::new();
        let err = run(&cli_config("invalid_cart.csv", Mode::Parse), &mut out).unwrap_err();

        assert!(matches!(err, CliError::Cart(CartError::ValidationFailed)));
        assert_eq!(err.to_string(), "Validation failed!");
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_valid_fixture() {
        let mut out = Vec::new();
        let outcome = run(&cli_config("sample_cart.csv", Mode::Check), &mut out).unwrap();

        assert_eq!(outcome, Outcome::Valid);
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_check_invalid_fixture() {
        let mut out = Vec::new();
        let outcome = run(&cli_config("invalid_cart.csv", Mode::Check), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Invalid(2));

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["type"], "CELL");
        assert_eq!(json[0]["row"], 2);
        assert_eq!(json[0]["column"], 1);
        assert_eq!(json[1]["type"], "ROW");
        assert_eq!(json[1]["row"], 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut out = Vec::new();
        for mode in [Mode::Parse, Mode::Check] {
            let err = run(&cli_config("does_not_exist.csv", mode), &mut out).unwrap_err();
            assert!(matches!(
                err,
                CliError::Cart(CartError::Io(_)) | CliError::Io(_)
            ));
        }
    }

    #[test]
    fn test_pretty_output() {
        let mut cfg = cli_config("sample_cart.csv", Mode::Parse);
        cfg.pretty = true;

        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n  \"items\": ["));
    }

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::Parsed.is_success());
        assert!(Outcome::Valid.is_success());
        assert!(!Outcome::Invalid(3).is_success());
    }
}
