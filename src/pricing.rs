//! Prices
//!
//! The backend stores net prices and a VAT percentage per product. Everything the client
//! shows is VAT inclusive and rounded to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};
use thiserror::Error;

use crate::{
    carts::CartItem,
    products::{Product, ProductId},
};

/// Decimal places prices are shown with.
pub const PRICE_SCALE: u32 = 2;

/// Errors that can occur while totalling a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A cart line refers to a product whose details have not been loaded.
    #[error("no price known for product {0}")]
    UnknownProduct(ProductId),

    /// Arithmetic overflowed the decimal range.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Net price plus VAT, unrounded.
pub fn gross_unit_price(price: Decimal, vat_percent: Decimal) -> Decimal {
    price + price * vat_percent / Decimal::ONE_HUNDRED
}

/// Round an amount to [`PRICE_SCALE`] places, halves away from zero.
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// VAT-inclusive total of one cart line, rounded.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the multiplication leaves the decimal range.
pub fn line_total(product: &Product, quantity: u32) -> Result<Decimal, PricingError> {
    product
        .gross_price()
        .checked_mul(Decimal::from(quantity))
        .map(round_price)
        .ok_or(PricingError::Overflow)
}

/// VAT-inclusive total of a cart, rounded once after summing.
///
/// # Errors
///
/// - [`PricingError::UnknownProduct`]: a line's product is missing from `products`.
/// - [`PricingError::Overflow`]: the sum leaves the decimal range.
pub fn cart_total(items: &[CartItem], products: &[Product]) -> Result<Decimal, PricingError> {
    let total = items.iter().try_fold(Decimal::ZERO, |sum, item| {
        let product = products
            .iter()
            .find(|product| product.id == item.product_id)
            .ok_or(PricingError::UnknownProduct(item.product_id))?;

        product
            .gross_price()
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| sum.checked_add(line))
            .ok_or(PricingError::Overflow)
    })?;

    Ok(round_price(total))
}

/// Format an amount in the given ISO currency, rounded to that currency's minor units.
///
/// Falls back to a plain two-decimal number when the currency code is unknown.
pub fn format_amount(amount: Decimal, currency: Option<&str>) -> String {
    match currency.and_then(|code| iso::find(&code.trim().to_uppercase())) {
        Some(currency) => {
            let rounded = amount
                .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);

            Money::from_decimal(rounded, currency).to_string()
        }
        None => format!("{:.2}", round_price(amount)),
    }
}
