//! Test support: mocked services wired into an [`AppContext`].

mod context;
mod helpers;

pub(crate) use context::*;
pub(crate) use helpers::*;
