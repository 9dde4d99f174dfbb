//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    carts::{CartData, CartItem, CartNumber, NewCartItem, QuantityChange},
    products::ProductId,
    users::UserId,
};

use crate::{
    domain::ServiceError,
    http::{ApiClient, NO_QUERY},
};

#[derive(Debug, Clone)]
pub struct HttpCartsService {
    client: ApiClient,
}

impl HttpCartsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn product_param(product: ProductId) -> [(&'static str, String); 1] {
    [("productId", product.to_string())]
}

#[async_trait]
impl CartsService for HttpCartsService {
    async fn get_cart(&self, cart: CartNumber, user: UserId) -> Result<CartData, ServiceError> {
        Ok(self
            .client
            .get(&format!("shoppingCart/{cart}/{user}"), NO_QUERY)
            .await?)
    }

    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, ServiceError> {
        Ok(self.client.post_json("shoppingCart", &item).await?)
    }

    async fn change_quantity(
        &self,
        cart: CartNumber,
        user: UserId,
        product: ProductId,
        change: QuantityChange,
    ) -> Result<(), ServiceError> {
        let direction = match change {
            QuantityChange::Increase => "increase",
            QuantityChange::Decrease => "decrease",
        };

        self.client
            .post_unit(
                &format!("shoppingCart/{cart}/{direction}/{user}"),
                &[("productId", product.to_string()), ("amount", "1".to_string())],
            )
            .await?;

        Ok(())
    }

    async fn remove_item(
        &self,
        cart: CartNumber,
        user: UserId,
        product: ProductId,
    ) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("shoppingCart/{cart}/{user}"), &product_param(product))
            .await?;

        Ok(())
    }

    async fn clear_cart(&self, cart: CartNumber, user: UserId) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("shoppingCart/{cart}/clear/{user}"), NO_QUERY)
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a user's cart.
    async fn get_cart(&self, cart: CartNumber, user: UserId) -> Result<CartData, ServiceError>;

    /// Add a product line; the backend rejects products already in the cart.
    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, ServiceError>;

    /// Change a line's quantity by one unit.
    async fn change_quantity(
        &self,
        cart: CartNumber,
        user: UserId,
        product: ProductId,
        change: QuantityChange,
    ) -> Result<(), ServiceError>;

    /// Remove a product line.
    async fn remove_item(
        &self,
        cart: CartNumber,
        user: UserId,
        product: ProductId,
    ) -> Result<(), ServiceError>;

    /// Remove every line.
    async fn clear_cart(&self, cart: CartNumber, user: UserId) -> Result<(), ServiceError>;
}
