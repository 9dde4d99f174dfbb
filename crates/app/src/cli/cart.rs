use clap::{Args, Subcommand};
use storefront::{
    carts::{QuantityChange, QuantityPlan},
    products::ProductId,
};
use storefront_app::{
    components::{AddOutcome, CART_EMPTY_ALERT, CartView, CheckoutOutcome, ProductListing},
    context::AppContext,
};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its total
    Show,

    /// Add one unit of a product
    Add { product: ProductId },

    /// Add one more unit of a product already in the cart
    Increase { product: ProductId },

    /// Take one unit away; the last unit removes the line
    Decrease { product: ProductId },

    /// Remove a product's line
    Remove { product: ProductId },

    /// Empty the cart
    Clear,

    /// Bill the cart and save the invoice
    Checkout,
}

pub(crate) async fn run(ctx: AppContext, command: CartCommand) -> Result<(), String> {
    let mut view = CartView::new(ctx.clone());

    view.load()
        .await
        .map_err(|error| format!("failed to load cart: {error}"))?;

    match command.command {
        CartSubcommand::Show => {}
        CartSubcommand::Add { product } => {
            let outcome = ProductListing::new(ctx.clone())
                .add_to_cart(product)
                .await
                .map_err(|error| format!("failed to add to cart: {error}"))?;

            if let Some(alert) = outcome.alert() {
                println!("{alert}");
            }

            if let AddOutcome::Added(_) = outcome {
                view.refresh_products()
                    .await
                    .map_err(|error| format!("failed to load cart products: {error}"))?;
            }
        }
        CartSubcommand::Increase { product } => {
            change(&mut view, product, QuantityChange::Increase).await?;
        }
        CartSubcommand::Decrease { product } => {
            change(&mut view, product, QuantityChange::Decrease).await?;
        }
        CartSubcommand::Remove { product } => view
            .remove(product)
            .await
            .map_err(|error| format!("failed to remove product: {error}"))?,
        CartSubcommand::Clear => view
            .clear()
            .await
            .map_err(|error| format!("failed to clear cart: {error}"))?,
        CartSubcommand::Checkout => {
            let outcome = view
                .checkout()
                .await
                .map_err(|error| format!("failed to check out: {error}"))?;

            match outcome {
                CheckoutOutcome::Completed { invoice, path } => {
                    println!("invoice {} saved to {}", invoice.id, path.display());
                }
                CheckoutOutcome::CartEmpty => println!("{CART_EMPTY_ALERT}"),
            }

            return Ok(());
        }
    }

    println!(
        "{}",
        render::cart(&view.lines(), view.total(), ctx.settings.currency.as_deref())
    );

    Ok(())
}

async fn change(
    view: &mut CartView,
    product: ProductId,
    change: QuantityChange,
) -> Result<(), String> {
    let plan = view
        .change_quantity(product, change)
        .await
        .map_err(|error| format!("failed to change quantity: {error}"))?;

    if plan == QuantityPlan::Remove {
        println!("removed product {product} from the cart");
    }

    Ok(())
}
