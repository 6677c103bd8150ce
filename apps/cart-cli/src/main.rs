//! # cart-csv Entry Point
//!
//! ```bash
//! # Parse a cart and print it as JSON
//! cargo run -p cart-cli -- fixtures/sample_cart.csv
//!
//! # Only list validation problems
//! cargo run -p cart-cli -- --check --pretty fixtures/invalid_cart.csv
//!
//! # Verbose logging
//! CART_LOG=debug cargo run -p cart-cli -- fixtures/sample_cart.csv
//! ```
//!
//! ## Startup Sequence
//! 1. Read flags and environment into `CliConfig`
//! 2. Initialize tracing (stderr)
//! 3. Run, print JSON to stdout
//! 4. Map the outcome to an exit code

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use cart_cli::config::{CliConfig, Command, USAGE};
use tracing::info;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let config = match CliConfig::load(env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Command::Run(config) => config,
    };

    cart_cli::init_tracing(&config.log_filter);
    info!(path = %config.input.display(), mode = ?config.mode, "starting cart-csv");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = cart_cli::run(&config, &mut out)
        .with_context(|| format!("could not process {}", config.input.display()))?;

    Ok(outcome.exit_code())
}
