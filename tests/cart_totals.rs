//! Integration tests for client-side cart totals

use std::str::FromStr;

use rust_decimal::Decimal;
use testresult::TestResult;

use storefront::prelude::*;

fn backend_products() -> TestResult<Vec<Product>> {
    Ok(serde_json::from_str(
        r#"[
            {"id": 1, "name": "Tea", "price": 10, "vat": 21},
            {"id": 2, "name": "Bread", "price": 2.5, "vat": 4},
            {"id": 3, "name": "Soap", "price": 0.99, "vat": 21}
        ]"#,
    )?)
}

fn backend_cart() -> TestResult<CartData> {
    Ok(serde_json::from_str(
        r#"{
            "numCart": 1,
            "userId": 9,
            "allCarts": [
                {"productId": 1, "stockSell": 2},
                {"productId": 2, "stockSell": 3}
            ],
            "totalPrices": 999.99
        }"#,
    )?)
}

#[test]
fn total_ignores_server_reported_total() -> TestResult {
    let cart = backend_cart()?;
    let products = backend_products()?;

    // 2 x 12.10 + 3 x 2.60
    assert_eq!(cart_total(&cart.items, &products)?, Decimal::from_str("32.00")?);

    Ok(())
}

#[test]
fn total_follows_edits_to_shared_cart() -> TestResult {
    let products = backend_products()?;
    let state = CartState::new();
    let view = state.clone();

    state.set(backend_cart()?);
    state.append(CartItem {
        product_id: ProductId::new(3),
        quantity: 1,
    });
    state.adjust_quantity(ProductId::new(2), -1);
    state.remove(ProductId::new(1));

    let items = view.snapshot().map(|cart| cart.items).unwrap_or_default();

    // 2 x 2.60 + 1.1979
    assert_eq!(cart_total(&items, &products)?, Decimal::from_str("6.40")?);

    Ok(())
}

#[test]
fn line_without_known_price_has_no_total() -> TestResult {
    let cart = backend_cart()?;
    let products: Vec<Product> = backend_products()?
        .into_iter()
        .filter(|product| product.id != ProductId::new(2))
        .collect();

    assert!(
        matches!(
            cart_total(&cart.items, &products),
            Err(PricingError::UnknownProduct(id)) if id == ProductId::new(2)
        ),
        "missing product should make the total unknown"
    );

    Ok(())
}

#[test]
fn decreasing_a_single_unit_removes_the_line() -> TestResult {
    let cart = backend_cart()?;

    let single = Some(1);
    let several = cart.item(ProductId::new(2)).map(|item| item.quantity);

    assert_eq!(
        QuantityPlan::for_change(single, QuantityChange::Decrease),
        QuantityPlan::Remove
    );
    assert_eq!(
        QuantityPlan::for_change(several, QuantityChange::Decrease),
        QuantityPlan::Decrement
    );

    Ok(())
}
