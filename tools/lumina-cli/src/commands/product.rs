//! Product detail view.

use anyhow::{Context as _, Result};
use lumina_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::format_rating;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.loaded_storefront().await?;
    let id = ProductId::new(args.id);

    let product = store
        .find_product(id)
        .with_context(|| format!("Product not found: {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.unit_price().display());
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "rating",
        &format!(
            "{} ({} reviews)",
            format_rating(product.rating.rate),
            product.rating.count
        ),
    );
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }

    let in_cart = store.cart().quantity_of(id);
    if in_cart > 0 {
        ctx.output.kv("in cart", &in_cart.to_string());
    }

    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    Ok(())
}
