//! Storefront client: HTTP services, session handling and the components that drive them.

pub mod auth;
pub mod components;
pub mod config;
pub mod context;
pub mod domain;
pub mod http;
pub mod observability;

#[cfg(test)]
mod test;
