//! Client configuration module

use clap::Args;

pub use self::{
    api::ApiConfig,
    observability::{LogFormat, LoggingConfig},
    shop::StorefrontConfig,
};

mod api;
mod observability;
mod shop;

/// Storefront client configuration, shared by every command.
#[derive(Debug, Args)]
pub struct ClientConfig {
    /// Backend and session settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Cart, checkout and display settings.
    #[command(flatten)]
    pub storefront: StorefrontConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
