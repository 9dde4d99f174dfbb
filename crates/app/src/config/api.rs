//! API Config

use std::path::PathBuf;

use clap::Args;

/// Backend connection settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Storefront API base URL
    #[arg(
        long,
        env = "STOREFRONT_BASE_URL",
        default_value = "http://localhost:8080/",
        global = true
    )]
    pub base_url: String,

    /// File holding the logged-in session between runs
    #[arg(
        long,
        env = "STOREFRONT_SESSION_FILE",
        default_value = ".storefront-session.json",
        global = true
    )]
    pub session_file: PathBuf,
}
