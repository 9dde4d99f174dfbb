//! Products

pub mod service;

pub use service::*;
