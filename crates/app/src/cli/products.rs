use clap::Args;
use storefront_app::{
    components::{ProductListing, SearchBar},
    context::AppContext,
};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Free-text search term; takes precedence over --category
    #[arg(long)]
    term: Option<String>,

    /// Category name
    #[arg(long)]
    category: Option<String>,
}

pub(crate) async fn list(ctx: AppContext, args: ProductsArgs) -> Result<(), String> {
    let currency = ctx.settings.currency.clone();
    let mut bar = SearchBar::new(ctx.clone());

    if let Some(term) = args.term {
        bar.set_term(term);
    }

    if let Some(category) = args.category {
        bar.select_category(category);
    }

    let mut listing = ProductListing::new(ctx);
    let products = listing
        .search(&bar.query())
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    println!("{}", render::products(products, currency.as_deref()));

    Ok(())
}

pub(crate) async fn categories(ctx: AppContext) -> Result<(), String> {
    let mut bar = SearchBar::new(ctx);

    let categories = bar
        .toggle_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?
        .unwrap_or_default();

    for category in categories {
        println!("{}", category.name);
    }

    Ok(())
}
