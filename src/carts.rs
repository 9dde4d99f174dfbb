//! Carts
//!
//! Client-side view of a user's cart and the shared holder components read and mutate.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, products::ProductId, users::UserId};

/// Cart number. The backend keys carts by `(number, user)`.
pub type CartNumber = TypedId<CartData>;

/// The cart number every user's active cart lives under.
pub const DEFAULT_CART_NUMBER: CartNumber = CartNumber::new(1);

/// A single cart line. At most one line exists per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product on this line
    #[serde(rename = "productId")]
    pub product_id: ProductId,

    /// Units of the product
    #[serde(rename = "stockSell")]
    pub quantity: u32,
}

/// Cart as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartData {
    /// Cart number
    #[serde(rename = "numCart")]
    pub number: CartNumber,

    /// Owning user
    #[serde(rename = "userId")]
    pub user_id: UserId,

    /// Cart lines
    #[serde(rename = "allCarts", default)]
    pub items: Vec<CartItem>,

    /// Server-side total. Informational only, see [`crate::pricing::cart_total`].
    #[serde(rename = "totalPrices", with = "rust_decimal::serde::float", default)]
    pub total_prices: Decimal,
}

impl CartData {
    /// An empty cart for the given user.
    pub fn empty(number: CartNumber, user_id: UserId) -> Self {
        Self {
            number,
            user_id,
            items: Vec::new(),
            total_prices: Decimal::ZERO,
        }
    }

    /// Find the line for a product.
    pub fn item(&self, product: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product)
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body sent when adding a product to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    /// Target cart number
    pub num_cart: CartNumber,

    /// Owning user
    pub user_id: UserId,

    /// Product to add
    pub product_id: ProductId,

    /// Initial quantity
    pub stock_sell: u32,
}

impl NewCartItem {
    /// A single unit of `product` for the given cart.
    pub fn single(num_cart: CartNumber, user_id: UserId, product_id: ProductId) -> Self {
        Self {
            num_cart,
            user_id,
            product_id,
            stock_sell: 1,
        }
    }
}

/// Direction of a quantity edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// One more unit
    Increase,

    /// One fewer unit
    Decrease,
}

/// What a quantity edit resolves to for a given cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPlan {
    /// Add one unit.
    Increment,

    /// Remove one unit.
    Decrement,

    /// Drop the line; decreasing a single unit never leaves a zero-quantity line.
    Remove,
}

impl QuantityPlan {
    /// Resolve a quantity edit against the line's current quantity.
    pub fn for_change(current: Option<u32>, change: QuantityChange) -> Self {
        match (change, current) {
            (QuantityChange::Increase, _) => Self::Increment,
            (QuantityChange::Decrease, Some(quantity)) if quantity <= 1 => Self::Remove,
            (QuantityChange::Decrease, _) => Self::Decrement,
        }
    }
}

/// Shared, mutable cart holder.
///
/// Cloning yields another handle to the same cart. Each operation is atomic on its own; a
/// sequence of operations is not, so concurrent edits resolve as last write wins.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    inner: Arc<RwLock<Option<CartData>>>,
}

impl CartState {
    /// A holder with no cart loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current cart, if loaded.
    pub fn snapshot(&self) -> Option<CartData> {
        self.inner.read().clone()
    }

    /// Whether a cart has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Replace the whole cart.
    pub fn set(&self, cart: CartData) {
        *self.inner.write() = Some(cart);
    }

    /// Append a line. Does nothing when no cart is loaded.
    pub fn append(&self, item: CartItem) {
        if let Some(cart) = self.inner.write().as_mut() {
            cart.items.push(item);
        }
    }

    /// Remove the line for `product`.
    pub fn remove(&self, product: ProductId) {
        if let Some(cart) = self.inner.write().as_mut() {
            cart.items.retain(|item| item.product_id != product);
        }
    }

    /// Adjust the quantity of the line for `product` by `delta`, saturating at zero.
    pub fn adjust_quantity(&self, product: ProductId, delta: i64) {
        if let Some(cart) = self.inner.write().as_mut() {
            for item in cart.items.iter_mut().filter(|item| item.product_id == product) {
                let adjusted = i64::from(item.quantity).saturating_add(delta).max(0);

                item.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
            }
        }
    }

    /// Empty the loaded cart's lines.
    pub fn clear(&self) {
        if let Some(cart) = self.inner.write().as_mut() {
            cart.items.clear();
        }
    }

    /// Forget the loaded cart entirely.
    pub fn reset(&self) {
        *self.inner.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn item(product: u64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(product),
            quantity,
        }
    }

    fn loaded(items: Vec<CartItem>) -> CartState {
        let state = CartState::new();

        state.set(CartData {
            items,
            ..CartData::empty(DEFAULT_CART_NUMBER, UserId::new(9))
        });

        state
    }

    #[test]
    fn decodes_backend_cart_payload() -> TestResult {
        let cart: CartData = serde_json::from_str(
            r#"{"numCart":1,"userId":9,"allCarts":[{"productId":4,"stockSell":2}],"totalPrices":24.2}"#,
        )?;

        assert_eq!(cart.number, DEFAULT_CART_NUMBER);
        assert_eq!(cart.user_id, UserId::new(9));
        assert_eq!(cart.items, vec![item(4, 2)]);
        assert_eq!(cart.total_prices, Decimal::new(242, 1));

        Ok(())
    }

    #[test]
    fn new_item_body_uses_backend_field_names() -> TestResult {
        let body = NewCartItem::single(DEFAULT_CART_NUMBER, UserId::new(9), ProductId::new(4));

        assert_eq!(
            serde_json::to_value(body)?,
            serde_json::json!({"numCart": 1, "userId": 9, "productId": 4, "stockSell": 1})
        );

        Ok(())
    }

    #[test]
    fn decreasing_single_unit_removes_line() {
        assert_eq!(
            QuantityPlan::for_change(Some(1), QuantityChange::Decrease),
            QuantityPlan::Remove
        );
        assert_eq!(
            QuantityPlan::for_change(Some(3), QuantityChange::Decrease),
            QuantityPlan::Decrement
        );
        assert_eq!(
            QuantityPlan::for_change(Some(1), QuantityChange::Increase),
            QuantityPlan::Increment
        );
    }

    #[test]
    fn append_is_ignored_until_cart_loaded() {
        let state = CartState::new();

        state.append(item(1, 1));

        assert!(state.snapshot().is_none());
    }

    #[test]
    fn handles_share_the_same_cart() {
        let state = loaded(vec![item(1, 1)]);
        let other = state.clone();

        other.append(item(2, 1));

        assert_eq!(
            state.snapshot().map(|cart| cart.items.len()),
            Some(2),
            "both handles should see the appended line"
        );
    }

    #[test]
    fn adjust_and_remove_only_touch_matching_line() {
        let state = loaded(vec![item(1, 2), item(2, 5)]);

        state.adjust_quantity(ProductId::new(2), -1);
        state.remove(ProductId::new(1));

        assert_eq!(state.snapshot().map(|cart| cart.items), Some(vec![item(2, 4)]));
    }

    #[test]
    fn adjust_saturates_at_zero() {
        let state = loaded(vec![item(1, 1)]);

        state.adjust_quantity(ProductId::new(1), -5);

        assert_eq!(state.snapshot().map(|cart| cart.items), Some(vec![item(1, 0)]));
    }

    #[test]
    fn clear_keeps_cart_loaded() {
        let state = loaded(vec![item(1, 1)]);

        state.clear();

        assert!(state.is_loaded());
        assert_eq!(state.snapshot().map(|cart| cart.is_empty()), Some(true));
    }
}
