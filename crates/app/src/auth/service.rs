//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use storefront::users::{Credentials, LoginResponse, UserProfile};

use crate::{
    domain::ServiceError,
    http::{ApiClient, NO_QUERY},
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ServiceError> {
        Ok(self.client.post("login", &credentials).await?)
    }

    async fn register(&self, profile: UserProfile) -> Result<(), ServiceError> {
        self.client.post_unit("register", &profile).await?;

        Ok(())
    }

    async fn logout(&self) -> Result<(), ServiceError> {
        self.client.post_unit("logout", NO_QUERY).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ServiceError>;

    /// Create an account. Does not log in.
    async fn register(&self, profile: UserProfile) -> Result<(), ServiceError>;

    /// Invalidate the current token server side.
    async fn logout(&self) -> Result<(), ServiceError>;
}
