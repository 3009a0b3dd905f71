//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use lumina_cache::FileStore;
use lumina_commerce::cart::{CartLineItem, CartPricing};
use lumina_commerce::ProductId;
use lumina_core::{Intent, Storefront};
use serde::Serialize;

use super::{CartArgs, CartCommand};
use crate::context::Context;

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [CartLineItem],
    unique_items: usize,
    pricing: CartPricing,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(ctx),
        CartCommand::Add { id, qty } => add_to_cart(ProductId::new(id), qty, ctx).await,
        CartCommand::Decrease { id } => decrease(ProductId::new(id), ctx),
        CartCommand::Remove { id } => remove(ProductId::new(id), ctx),
        CartCommand::Clear { yes } => clear_cart(yes, ctx),
    }
}

fn show_cart(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    print_cart(&store, ctx)
}

async fn add_to_cart(id: ProductId, qty: u32, ctx: &Context) -> Result<()> {
    if qty == 0 {
        bail!("Quantity must be at least 1");
    }
    let mut store = ctx.loaded_storefront().await?;
    store.add_to_cart_by_id(id, qty)?;

    let title = store
        .find_product(id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| id.to_string());
    ctx.output.success(&format!("Added {} x {}", qty, title));
    print_cart(&store, ctx)
}

fn decrease(id: ProductId, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    ensure_in_cart(&store, id)?;

    store.dispatch(Intent::DecreaseCartQuantity(id));
    match store.cart().quantity_of(id) {
        0 => ctx.output.success(&format!("Removed {} from the cart", id)),
        n => ctx.output.success(&format!("{} now has quantity {}", id, n)),
    }
    print_cart(&store, ctx)
}

fn remove(id: ProductId, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    ensure_in_cart(&store, id)?;

    store.dispatch(Intent::RemoveFromCart(id));
    ctx.output.success(&format!("Removed {} from the cart", id));
    print_cart(&store, ctx)
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if store.cart().is_empty() {
        ctx.output.info("The cart is already empty.");
        return Ok(());
    }

    if !yes && ctx.output.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                store.cart_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled.");
            return Ok(());
        }
    } else if !yes {
        bail!("Refusing to clear the cart without --yes in non-interactive mode");
    }

    store.dispatch(Intent::ClearCart);
    ctx.output.success("Cart cleared");
    print_cart(&store, ctx)
}

fn ensure_in_cart(store: &Storefront<FileStore>, id: ProductId) -> Result<()> {
    if store.cart().get(id).is_none() {
        bail!("Product {} is not in the cart", id);
    }
    Ok(())
}

fn print_cart(store: &Storefront<FileStore>, ctx: &Context) -> Result<()> {
    let cart = store.cart();
    let pricing = store.cart_pricing()?;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            unique_items: cart.unique_item_count(),
            pricing,
        });
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", pricing.item_count));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let title_width = ctx.output.title_width(44);
    let widths = [6, title_width, 5, 10, 10];
    ctx.output
        .table_row(&["ID", "TITLE", "QTY", "PRICE", "TOTAL"], &widths);
    for (item, line) in cart.items().iter().zip(&pricing.line_items) {
        ctx.output.table_row(
            &[
                &item.id().to_string(),
                &item.product.title,
                &item.quantity.to_string(),
                &line.unit_price.display(),
                &line.total.display(),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("subtotal", &pricing.subtotal.display());
    ctx.output.kv(
        &format!("tax ({})", pricing.tax_rate_label()),
        &pricing.tax_total.display(),
    );
    ctx.output.kv("total", &pricing.grand_total.display());
    Ok(())
}
