//! # CLI Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigError  ─┐                                                        │
//! │  CartError    ─┼──► CliError ──► anyhow (main) ──► stderr + exit 1      │
//! │  serde_json   ─┤                                                        │
//! │  io::Error    ─┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::CartError;
use thiserror::Error;

/// Bad flags or environment values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing input file (see --help)")]
    MissingInput,

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Everything `run` can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// Reading the input (check mode) or writing the output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
