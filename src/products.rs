//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, pricing::gross_unit_price};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Product as listed by the storefront backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Net unit price, before VAT
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// VAT rate as a percentage, e.g. `21` for 21%
    #[serde(with = "rust_decimal::serde::float")]
    pub vat: Decimal,
}

impl Product {
    /// Unit price including VAT, unrounded.
    pub fn gross_price(&self) -> Decimal {
        gross_unit_price(self.price, self.vat)
    }
}

/// Product category used to narrow a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: CategoryId,

    /// Category name; also the value sent when filtering by category
    pub name: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_backend_product_payload() -> TestResult {
        let product: Product =
            serde_json::from_str(r#"{"id":3,"name":"Kettle","price":10.5,"vat":21}"#)?;

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "Kettle");
        assert_eq!(product.price, Decimal::new(105, 1));
        assert_eq!(product.vat, Decimal::from(21));

        Ok(())
    }

    #[test]
    fn gross_price_adds_vat() {
        let product = Product {
            id: ProductId::new(1),
            name: "Lamp".to_string(),
            price: Decimal::from(10),
            vat: Decimal::from(21),
        };

        assert_eq!(product.gross_price(), Decimal::new(121, 1));
    }
}
