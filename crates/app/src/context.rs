//! App Context

use std::{path::PathBuf, sync::Arc};

use storefront::carts::{CartNumber, CartState};
use thiserror::Error;

use crate::{
    auth::{AuthService, FileSessionStore, HttpAuthService, SessionManager},
    config::ClientConfig,
    domain::{
        carts::{CartsService, HttpCartsService},
        invoices::{HttpInvoicesService, InvoicesService},
        products::{HttpProductsService, ProductsService},
        users::{HttpUsersService, UsersService},
    },
    http::{ApiClient, ApiError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid API base URL")]
    BaseUrl(#[source] ApiError),
}

/// Client-side settings shared by the components.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Cart the user shops into.
    pub cart_number: CartNumber,

    /// Where checkout saves invoice documents.
    pub download_dir: PathBuf,

    /// Currency used to format totals; plain decimals when unset.
    pub currency: Option<String>,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub invoices: Arc<dyn InvoicesService>,
    pub users: Arc<dyn UsersService>,
    pub session: Arc<SessionManager>,
    pub cart: CartState,
    pub settings: ClientSettings,
}

impl AppContext {
    /// Build application context from client configuration.
    ///
    /// Every service shares one HTTP client, and so one bearer token. The stored session is
    /// not restored here; see [`SessionManager::restore`].
    ///
    /// # Errors
    ///
    /// Returns an error when the configured base URL is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppInitError> {
        let client = ApiClient::new(&config.api.base_url).map_err(AppInitError::BaseUrl)?;

        let session = SessionManager::new(
            Arc::new(FileSessionStore::new(&config.api.session_file)),
            client.bearer().clone(),
        );

        Ok(Self {
            auth: Arc::new(HttpAuthService::new(client.clone())),
            products: Arc::new(HttpProductsService::new(client.clone())),
            carts: Arc::new(HttpCartsService::new(client.clone())),
            invoices: Arc::new(HttpInvoicesService::new(client.clone())),
            users: Arc::new(HttpUsersService::new(client)),
            session: Arc::new(session),
            cart: CartState::new(),
            settings: ClientSettings {
                cart_number: config.storefront.cart_number,
                download_dir: config.storefront.download_dir.clone(),
                currency: config.storefront.currency.clone(),
            },
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .field("cart", &self.cart)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
