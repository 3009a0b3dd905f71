//! Category listing.

use anyhow::Result;
use lumina_commerce::catalog::Product;
use serde::Serialize;

use super::CategoriesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryCount<'a> {
    name: &'a str,
    products: usize,
}

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let store = ctx.loaded_storefront().await?;
    let catalog = store.catalog();

    if catalog.categories().is_empty() {
        ctx.output.warn("The catalog did not report any categories.");
    }

    let counts = count_by_category(catalog.categories(), catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Categories");
    for c in &counts {
        ctx.output
            .list_item(&format!("{} ({} products)", c.name, c.products));
    }
    Ok(())
}

fn count_by_category<'a>(categories: &'a [String], products: &[Product]) -> Vec<CategoryCount<'a>> {
    categories
        .iter()
        .map(|name| CategoryCount {
            name,
            products: products.iter().filter(|p| &p.category == name).count(),
        })
        .collect()
}
