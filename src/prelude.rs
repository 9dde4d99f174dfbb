//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    account::{DialogMode, Dialogs},
    carts::{
        CartData, CartItem, CartNumber, CartState, DEFAULT_CART_NUMBER, NewCartItem,
        QuantityChange, QuantityPlan,
    },
    ids::TypedId,
    invoices::{Invoice, InvoiceId},
    pricing::{PricingError, cart_total, format_amount, line_total, round_price},
    products::{Category, CategoryId, Product, ProductId},
    search::ProductQuery,
    session::{Session, TokenClaims, TokenError, View, decode_claims},
    users::{Credentials, LoginResponse, ProfileChanges, UserId, UserProfile, UserSummary},
};
