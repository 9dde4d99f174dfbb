//! Storefront API services, one per backend resource.

pub mod carts;
pub mod errors;
pub mod invoices;
pub mod products;
pub mod users;

pub use errors::ServiceError;
