use rust_decimal::Decimal;
use storefront::{
    invoices::Invoice, pricing::format_amount, products::Product, users::UserSummary,
};
use storefront_app::components::CartLine;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

const UNKNOWN: &str = "?";

pub(crate) fn products(products: &[Product], currency: Option<&str>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Price", "VAT %", "Price incl. VAT"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            format_amount(product.price, currency),
            product.vat.normalize().to_string(),
            format_amount(product.gross_price(), currency),
        ]);
    }

    build(builder, Some(2))
}

pub(crate) fn cart(lines: &[CartLine], total: Option<Decimal>, currency: Option<&str>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Unit price", "Qty", "Line total"]);

    for line in lines {
        builder.push_record([
            line.item.product_id.to_string(),
            line.product
                .as_ref()
                .map_or_else(|| UNKNOWN.to_string(), |product| product.name.clone()),
            amount(line.unit_price(), currency),
            line.item.quantity.to_string(),
            amount(line.total(), currency),
        ]);
    }

    format!("{}\nTotal: {}", build(builder, Some(2)), amount(total, currency))
}

pub(crate) fn invoices(invoices: &[Invoice], currency: Option<&str>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Date", "Total"]);

    for invoice in invoices {
        builder.push_record([
            invoice.id.to_string(),
            invoice.invoice_date.to_string(),
            format_amount(invoice.total_price, currency),
        ]);
    }

    build(builder, Some(2))
}

pub(crate) fn users(users: &[UserSummary]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Email", "Currency"]);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            user.currency.clone(),
        ]);
    }

    build(builder, None)
}

fn amount(value: Option<Decimal>, currency: Option<&str>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |value| format_amount(value, currency))
}

/// Render with columns from `numeric_from` onwards right-aligned.
fn build(builder: Builder, numeric_from: Option<usize>) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());

    if let Some(first) = numeric_from {
        table.modify(Columns::new(first..), Alignment::right());
    }

    table.to_string()
}
