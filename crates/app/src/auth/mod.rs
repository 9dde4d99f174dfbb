//! Authentication

mod errors;
mod service;
mod session;
mod store;

pub use errors::*;
pub use service::*;
pub use session::*;
pub use store::*;
