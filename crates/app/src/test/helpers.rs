//! Test Helpers

use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::{SignedDuration, Timestamp, civil::date};
use rust_decimal::Decimal;
use storefront::{
    invoices::{Invoice, InvoiceId},
    products::{Product, ProductId},
    users::UserId,
};

/// Unsigned JWT-shaped token whose `exp` claim is `expires_at`.
pub(crate) fn token_expiring_at(expires_at: Timestamp) -> Result<String, serde_json::Error> {
    let header = serde_json::to_vec(&serde_json::json!({ "alg": "HS256", "typ": "JWT" }))?;
    let claims = serde_json::to_vec(&serde_json::json!({
        "sub": "ana@example.com",
        "iat": expires_at.as_second() - 3600,
        "exp": expires_at.as_second(),
    }))?;

    Ok(format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(claims)
    ))
}

pub(crate) fn valid_token() -> Result<String, serde_json::Error> {
    token_expiring_at(Timestamp::now() + SignedDuration::from_hours(1))
}

pub(crate) fn product(id: u64, price: &str, vat: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Decimal::from_str(price).expect("valid price"),
        vat: Decimal::from_str(vat).expect("valid vat"),
    }
}

pub(crate) fn invoice(id: u64, user: UserId) -> Invoice {
    Invoice {
        id: InvoiceId::new(id),
        user_id: user,
        invoice_date: date(2024, 5, 1),
        total_price: Decimal::new(2420, 2),
    }
}
