//! Auth errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to access session file")]
    Io(#[from] io::Error),

    #[error("failed to encode session")]
    Json(#[from] serde_json::Error),
}

/// An operation needed a user id but no session is held.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("not logged in")]
pub struct NotLoggedIn;
