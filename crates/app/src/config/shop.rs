//! Shop Config

use std::path::PathBuf;

use clap::Args;
use storefront::carts::CartNumber;

/// Cart and checkout settings.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Cart number to shop into
    #[arg(long, env = "STOREFRONT_CART_NUMBER", default_value = "1", global = true)]
    pub cart_number: CartNumber,

    /// Directory invoice documents are saved to
    #[arg(long, env = "STOREFRONT_DOWNLOAD_DIR", default_value = ".", global = true)]
    pub download_dir: PathBuf,

    /// ISO currency code used to format totals
    #[arg(long, env = "STOREFRONT_CURRENCY", global = true)]
    pub currency: Option<String>,
}
