//! Component errors.

use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;
use tracing::error;

use storefront::products::ProductId;

use crate::{
    auth::{NotLoggedIn, SessionStoreError},
    domain::ServiceError,
};

/// Failure of a component operation.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(transparent)]
    NotLoggedIn(#[from] NotLoggedIn),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A quantity edit named a product with no line in the loaded cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("failed to persist session")]
    Session(#[from] SessionStoreError),

    #[error("failed to save invoice to {}", path.display())]
    Download {
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

/// Log a failure before handing it back to the caller.
pub(crate) trait ResultExt<T> {
    fn or_log(self, context: &str) -> Result<T, ComponentError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display + Into<ComponentError>,
{
    fn or_log(self, context: &str) -> Result<T, ComponentError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            error.into()
        })
    }
}
