//! Test context for component tests.

use std::{path::PathBuf, sync::Arc};

use parking_lot::Mutex;
use storefront::{carts::{CartState, DEFAULT_CART_NUMBER}, session::Session, users::UserId};
use testresult::TestResult;

use crate::{
    auth::{MockAuthService, SessionManager, SessionStore, SessionStoreError},
    context::{AppContext, ClientSettings},
    domain::{
        carts::MockCartsService, invoices::MockInvoicesService, products::MockProductsService,
        users::MockUsersService,
    },
    http::BearerToken,
};

use super::valid_token;

/// Session store that never touches the disk.
#[derive(Debug, Default)]
pub(crate) struct MemorySessionStore(Mutex<Option<Session>>);

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.0.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.0.lock() = Some(session.clone());

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.0.lock() = None;

        Ok(())
    }
}

pub(crate) struct TestServices {
    pub auth: MockAuthService,
    pub products: MockProductsService,
    pub carts: MockCartsService,
    pub invoices: MockInvoicesService,
    pub users: MockUsersService,
    download_dir: PathBuf,
}

impl TestServices {
    pub fn new() -> Self {
        Self {
            auth: MockAuthService::new(),
            products: MockProductsService::new(),
            carts: MockCartsService::new(),
            invoices: MockInvoicesService::new(),
            users: MockUsersService::new(),
            download_dir: std::env::temp_dir(),
        }
    }

    pub fn with_download_dir(mut self, dir: PathBuf) -> Self {
        self.download_dir = dir;
        self
    }

    /// Context with no one logged in.
    pub fn into_context(self) -> AppContext {
        let session = SessionManager::new(
            Arc::new(MemorySessionStore::default()),
            BearerToken::default(),
        );

        AppContext {
            auth: Arc::new(self.auth),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            invoices: Arc::new(self.invoices),
            users: Arc::new(self.users),
            session: Arc::new(session),
            cart: CartState::new(),
            settings: ClientSettings {
                cart_number: DEFAULT_CART_NUMBER,
                download_dir: self.download_dir,
                currency: None,
            },
        }
    }

    /// Context with `user` logged in on an unexpired token.
    pub fn logged_in(self, user: UserId) -> TestResult<AppContext> {
        let ctx = self.into_context();

        ctx.session.begin(Session::new(valid_token()?, user))?;

        Ok(ctx)
    }
}
