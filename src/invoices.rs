//! Invoices

use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::{ids::TypedId, users::UserId};

/// Invoice Id
pub type InvoiceId = TypedId<Invoice>;

/// Billing record created by the backend at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice id
    pub id: InvoiceId,

    /// Billed user
    pub user_id: UserId,

    /// Day the invoice was issued
    #[serde(deserialize_with = "deserialize_invoice_date")]
    pub invoice_date: Date,

    /// Amount billed, VAT included
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Parse the backend's invoice date.
///
/// Accepts a calendar date (`2024-05-01`), a civil date-time (`2024-05-01T10:30:00`) or an
/// RFC 3339 timestamp, which is read in UTC.
///
/// # Errors
///
/// Returns the last parse error when none of the formats match.
pub fn parse_invoice_date(raw: &str) -> Result<Date, jiff::Error> {
    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date);
    }

    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Ok(datetime.date());
    }

    let timestamp = raw.parse::<Timestamp>()?;

    Ok(timestamp.to_zoned(TimeZone::UTC).date())
}

fn deserialize_invoice_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let raw = String::deserialize(deserializer)?;

    parse_invoice_date(&raw).map_err(D::Error::custom)
}
