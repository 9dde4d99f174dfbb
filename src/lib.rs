//! Storefront
//!
//! Client-side model of the storefront: products, carts and their VAT-inclusive totals,
//! session tokens, product query selection and account dialogs. The backend owns pricing,
//! stock and invoicing; this crate only mirrors what a client needs to hold.

pub mod account;
pub mod carts;
pub mod ids;
pub mod invoices;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod search;
pub mod session;
pub mod users;
