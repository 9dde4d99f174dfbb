//! Users service.

use async_trait::async_trait;
use mockall::automock;
use storefront::users::{UserId, UserProfile, UserSummary};

use crate::{
    domain::ServiceError,
    http::{ApiClient, NO_QUERY},
};

#[derive(Debug, Clone)]
pub struct HttpUsersService {
    client: ApiClient,
}

impl HttpUsersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersService for HttpUsersService {
    async fn get_user(&self, user: UserId) -> Result<UserProfile, ServiceError> {
        Ok(self.client.get(&format!("user/{user}"), NO_QUERY).await?)
    }

    async fn update_user(&self, user: UserId, profile: UserProfile) -> Result<(), ServiceError> {
        self.client.put(&format!("user/{user}"), &profile).await?;

        Ok(())
    }

    async fn delete_user(&self, user: UserId) -> Result<(), ServiceError> {
        self.client.delete(&format!("user/{user}"), NO_QUERY).await?;

        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ServiceError> {
        Ok(self.client.get("user", NO_QUERY).await?)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieve a user's profile.
    async fn get_user(&self, user: UserId) -> Result<UserProfile, ServiceError>;

    /// Replace a user's profile.
    async fn update_user(&self, user: UserId, profile: UserProfile) -> Result<(), ServiceError>;

    /// Delete a user. Irreversible.
    async fn delete_user(&self, user: UserId) -> Result<(), ServiceError>;

    /// Retrieves the user directory.
    async fn list_users(&self) -> Result<Vec<UserSummary>, ServiceError>;
}
