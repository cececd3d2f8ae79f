//! CLI configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiArgs, observability::LoggingConfig, session::SessionArgs},
};

pub(crate) mod api;
pub(crate) mod observability;
pub(crate) mod session;

/// Storefront marketplace client
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront marketplace client", long_about = None)]
pub(crate) struct CliConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub api: ApiArgs,

    /// Saved session settings.
    #[command(flatten)]
    pub session: SessionArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
