//! Storefront command line client

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::CliConfig;

mod commands;
mod config;
mod observability;
mod prompt;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    let mut out = io::stdout();

    match commands::run(config, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("command failed: {error}");

            #[expect(
                clippy::print_stderr,
                reason = "failures are reported to the user on stderr"
            )]
            {
                eprintln!("Error: {}", error.user_message());
            }

            ExitCode::FAILURE
        }
    }
}
