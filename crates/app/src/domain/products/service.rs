//! Products service.

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    products::{Category, Product, ProductId},
    search::ProductQuery,
};

use crate::{
    domain::ServiceError,
    http::{ApiClient, NO_QUERY},
};

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: ApiClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ServiceError> {
        Ok(self.client.get(query.path(), &query.params()).await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ServiceError> {
        Ok(self
            .client
            .get(&format!("products/{product}"), NO_QUERY)
            .await?)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.client.get("categories", NO_QUERY).await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the products matching a query.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ServiceError>;

    /// Retrieves every product category.
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;
}
