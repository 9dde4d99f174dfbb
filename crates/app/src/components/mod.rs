//! Storefront components.
//!
//! Each component pairs a little local state with the backend calls that drive it. Status
//! codes that have a meaning at a call site become outcome values; every other failure is
//! logged and handed back with local state left as it was.

mod account_panel;
mod cart_view;
mod errors;
mod product_listing;
mod search_bar;

pub use account_panel::*;
pub use cart_view::*;
pub use errors::*;
pub use product_listing::*;
pub use search_bar::*;
