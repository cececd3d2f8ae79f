//! Session Config

use std::path::PathBuf;

use clap::Args;

/// Saved session settings.
#[derive(Debug, Args)]
pub(crate) struct SessionArgs {
    /// File holding the logged-in session
    #[arg(long, env = "STOREFRONT_SESSION_FILE", default_value = ".storefront-session.json")]
    pub session_file: PathBuf,
}
