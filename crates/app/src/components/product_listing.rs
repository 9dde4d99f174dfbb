//! Product listing.

use storefront::{
    carts::{CartItem, NewCartItem},
    products::{Product, ProductId},
    search::ProductQuery,
};
use tracing::{info, warn};

use crate::{context::AppContext, domain::ServiceError};

use super::{ComponentError, ResultExt};

/// Alert shown when a product is added twice.
pub const ALREADY_IN_CART_ALERT: &str = "That product is already in the cart";

/// Result of an add-to-cart the backend answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The backend created the line.
    Added(CartItem),

    /// The product already has a line in the cart.
    AlreadyInCart,
}

impl AddOutcome {
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Self::AlreadyInCart => Some(ALREADY_IN_CART_ALERT),
            Self::Added(_) => None,
        }
    }
}

/// Products matching the last search.
#[derive(Debug)]
pub struct ProductListing {
    ctx: AppContext,
    products: Vec<Product>,
}

impl ProductListing {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
        }
    }

    /// Replace the listing with the products matching `query`. No matches is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails; the previous listing is kept.
    pub async fn search(&mut self, query: &ProductQuery) -> Result<&[Product], ComponentError> {
        self.products = match self.ctx.products.list_products(query).await {
            Ok(products) => products,
            Err(ServiceError::NotFound) => Vec::new(),
            Err(error) => return Err(error).or_log("failed to list products"),
        };

        Ok(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Put one unit of `product` in the user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in or the request fails.
    pub async fn add_to_cart(&self, product: ProductId) -> Result<AddOutcome, ComponentError> {
        let user = self.ctx.session.user_id()?;
        let item = NewCartItem::single(self.ctx.settings.cart_number, user, product);

        match self.ctx.carts.add_item(item).await {
            Ok(added) => {
                info!(%user, product = %added.product_id, "added to cart");
                self.ctx.cart.append(added);

                Ok(AddOutcome::Added(added))
            }
            Err(ServiceError::Conflict) => {
                warn!(%user, %product, "{ALREADY_IN_CART_ALERT}");

                Ok(AddOutcome::AlreadyInCart)
            }
            Err(error) => Err(error).or_log("failed to add to cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use storefront::{
        carts::{CartData, DEFAULT_CART_NUMBER},
        users::UserId,
    };
    use testresult::TestResult;

    use crate::test::{TestServices, product};

    use super::*;

    const USER: UserId = UserId::new(9);

    #[tokio::test]
    async fn search_forwards_the_selected_query() -> TestResult {
        let mut services = TestServices::new();

        services
            .products
            .expect_list_products()
            .with(eq(ProductQuery::Term("tea".to_string())))
            .returning(|_| Ok(vec![product(1, "4.5", "10")]));

        let mut listing = ProductListing::new(services.into_context());

        let query = ProductQuery::select(Some("tea"), Some("Drinks"));
        let found = listing.search(&query).await?;

        assert_eq!(found.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn no_matches_is_an_empty_listing() -> TestResult {
        let mut services = TestServices::new();

        services
            .products
            .expect_list_products()
            .returning(|_| Err(ServiceError::NotFound));

        let mut listing = ProductListing::new(services.into_context());

        assert!(
            listing.search(&ProductQuery::All).await?.is_empty(),
            "404 should read as no products"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_appends_confirmed_item() -> TestResult {
        let mut services = TestServices::new();

        services
            .carts
            .expect_add_item()
            .with(eq(NewCartItem::single(DEFAULT_CART_NUMBER, USER, ProductId::new(4))))
            .returning(|item| {
                Ok(CartItem {
                    product_id: item.product_id,
                    quantity: 1,
                })
            });

        let ctx = services.logged_in(USER)?;
        ctx.cart.set(CartData::empty(DEFAULT_CART_NUMBER, USER));

        let outcome = ProductListing::new(ctx.clone())
            .add_to_cart(ProductId::new(4))
            .await?;

        assert!(matches!(outcome, AddOutcome::Added(_)), "got {outcome:?}");
        assert!(
            ctx.cart
                .snapshot()
                .is_some_and(|cart| cart.item(ProductId::new(4)).is_some()),
            "cart should hold the new line"
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_add_alerts_without_touching_cart() -> TestResult {
        let mut services = TestServices::new();

        services
            .carts
            .expect_add_item()
            .returning(|_| Err(ServiceError::Conflict));

        let ctx = services.logged_in(USER)?;
        ctx.cart.set(CartData::empty(DEFAULT_CART_NUMBER, USER));

        let outcome = ProductListing::new(ctx.clone())
            .add_to_cart(ProductId::new(4))
            .await?;

        assert_eq!(outcome, AddOutcome::AlreadyInCart);
        assert_eq!(outcome.alert(), Some(ALREADY_IN_CART_ALERT));
        assert_eq!(ctx.cart.snapshot().map(|cart| cart.items.len()), Some(0));

        Ok(())
    }
}
