//! Cart view and checkout.

use std::path::PathBuf;

use futures::future::try_join_all;
use rust_decimal::Decimal;
use storefront::{
    carts::{CartData, CartItem, QuantityChange, QuantityPlan},
    invoices::Invoice,
    pricing::{cart_total, line_total},
    products::{Product, ProductId},
};
use tracing::{debug, info, warn};

use crate::{context::AppContext, domain::ServiceError};

use super::{ComponentError, ResultExt};

/// Alert shown when checkout finds nothing to bill.
pub const CART_EMPTY_ALERT: &str = "Shopping cart is empty";

/// A cart line joined with its product details.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product id and quantity as the backend holds them.
    pub item: CartItem,

    /// `None` while the product could not be fetched.
    pub product: Option<Product>,
}

impl CartLine {
    /// VAT-inclusive price of one unit.
    pub fn unit_price(&self) -> Option<Decimal> {
        self.product.as_ref().map(Product::gross_price)
    }

    /// VAT-inclusive line total, rounded.
    pub fn total(&self) -> Option<Decimal> {
        self.product
            .as_ref()
            .and_then(|product| line_total(product, self.item.quantity).ok())
    }
}

/// Result of a checkout the backend answered.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The invoice was created and its document saved to `path`.
    Completed { invoice: Invoice, path: PathBuf },

    /// The backend refused to bill an empty cart.
    CartEmpty,
}

impl CheckoutOutcome {
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Self::CartEmpty => Some(CART_EMPTY_ALERT),
            Self::Completed { .. } => None,
        }
    }
}

/// Shows the shared cart with current product prices and drives edits and checkout.
///
/// Local state only changes after the backend accepts an edit. Lines and total are read
/// from the shared [`CartState`](storefront::carts::CartState) on every call, so edits made
/// by other components show up without a reload.
#[derive(Debug)]
pub struct CartView {
    ctx: AppContext,
    products: Vec<Product>,
}

impl CartView {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
        }
    }

    /// Fetch the user's cart and the details of every product in it.
    ///
    /// A user without a cart gets an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in or a request fails.
    pub async fn load(&mut self) -> Result<(), ComponentError> {
        let user = self.ctx.session.user_id()?;
        let number = self.ctx.settings.cart_number;

        let cart = match self.ctx.carts.get_cart(number, user).await {
            Ok(cart) => cart,
            Err(ServiceError::NotFound) => {
                info!(%user, cart = %number, "no cart yet, starting empty");
                CartData::empty(number, user)
            }
            Err(error) => return Err(error).or_log("failed to load cart"),
        };

        self.ctx.cart.set(cart);

        self.refresh_products().await
    }

    /// Re-fetch product details for every line, concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error when any product request fails; the previous details are kept.
    pub async fn refresh_products(&mut self) -> Result<(), ComponentError> {
        let items = self.items();

        let products = try_join_all(
            items
                .iter()
                .map(|item| self.ctx.products.get_product(item.product_id)),
        )
        .await
        .or_log("failed to load cart products")?;

        self.products = products;

        Ok(())
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.items()
            .into_iter()
            .map(|item| CartLine {
                product: self
                    .products
                    .iter()
                    .find(|product| product.id == item.product_id)
                    .cloned(),
                item,
            })
            .collect()
    }

    /// VAT-inclusive total of the shared cart.
    ///
    /// `None` while no cart is loaded or a line's product has not been fetched; see
    /// [`Self::refresh_products`].
    pub fn total(&self) -> Option<Decimal> {
        let cart = self.ctx.cart.snapshot()?;

        match cart_total(&cart.items, &self.products) {
            Ok(total) => Some(total),
            Err(source) => {
                debug!("cart total unavailable: {source}");
                None
            }
        }
    }

    /// Add or take away one unit. Taking the last unit removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in, the product has no line in the cart or the
    /// backend rejects the edit.
    pub async fn change_quantity(
        &mut self,
        product: ProductId,
        change: QuantityChange,
    ) -> Result<QuantityPlan, ComponentError> {
        let user = self.ctx.session.user_id()?;

        let current = self
            .ctx
            .cart
            .snapshot()
            .and_then(|cart| cart.item(product).map(|item| item.quantity))
            .ok_or(ComponentError::NotInCart(product))?;

        let plan = QuantityPlan::for_change(Some(current), change);

        let delta = match plan {
            QuantityPlan::Remove => {
                self.remove(product).await?;
                return Ok(plan);
            }
            QuantityPlan::Increment => 1,
            QuantityPlan::Decrement => -1,
        };

        self.ctx
            .carts
            .change_quantity(self.ctx.settings.cart_number, user, product, change)
            .await
            .or_log("failed to change quantity")?;

        self.ctx.cart.adjust_quantity(product, delta);

        Ok(plan)
    }

    /// Drop a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in or the backend rejects the removal.
    pub async fn remove(&mut self, product: ProductId) -> Result<(), ComponentError> {
        let user = self.ctx.session.user_id()?;

        self.ctx
            .carts
            .remove_item(self.ctx.settings.cart_number, user, product)
            .await
            .or_log("failed to remove cart item")?;

        self.ctx.cart.remove(product);
        self.products.retain(|known| known.id != product);

        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in or the backend rejects the request.
    pub async fn clear(&mut self) -> Result<(), ComponentError> {
        let user = self.ctx.session.user_id()?;

        self.ctx
            .carts
            .clear_cart(self.ctx.settings.cart_number, user)
            .await
            .or_log("failed to clear cart")?;

        self.ctx.cart.clear();
        self.products.clear();

        Ok(())
    }

    /// Bill the cart, save the invoice document and reload the now-empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in, a request fails or the document cannot be
    /// written.
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome, ComponentError> {
        let user = self.ctx.session.user_id()?;

        let invoice = match self
            .ctx
            .invoices
            .create_invoice(self.ctx.settings.cart_number, user)
            .await
        {
            Ok(invoice) => invoice,
            Err(ServiceError::BadRequest(_)) => {
                warn!(%user, "{CART_EMPTY_ALERT}");
                return Ok(CheckoutOutcome::CartEmpty);
            }
            Err(error) => return Err(error).or_log("failed to create invoice"),
        };

        let document = self
            .ctx
            .invoices
            .invoice_document(invoice.id)
            .await
            .or_log("failed to download invoice")?;

        let dir = &self.ctx.settings.download_dir;
        let path = dir.join(format!("invoice-{}.pdf", invoice.id));

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| ComponentError::Download {
                path: dir.clone(),
                source,
            })?;

        tokio::fs::write(&path, document)
            .await
            .map_err(|source| ComponentError::Download {
                path: path.clone(),
                source,
            })?;

        info!(invoice = %invoice.id, path = %path.display(), "invoice saved");

        self.load().await?;

        Ok(CheckoutOutcome::Completed { invoice, path })
    }

    fn items(&self) -> Vec<CartItem> {
        self.ctx
            .cart
            .snapshot()
            .map(|cart| cart.items)
            .unwrap_or_default()
    }

}
