//! Catalog browsing.

use anyhow::Result;
use lumina_commerce::catalog::Product;
use lumina_commerce::search::{
    CategoryFilter, FilterState, FilterUpdate, Pagination, PaginationMode, ProductListing,
};
use lumina_core::Intent;
use serde::Serialize;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_rating, Output};

#[derive(Serialize)]
struct BrowseView<'a> {
    filters: &'a FilterState,
    mode: PaginationMode,
    pagination: Pagination,
    has_more: bool,
    products: &'a [Product],
    cart_count: u64,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.loaded_storefront().await?;

    for intent in intents(&args) {
        ctx.output.debug(&format!("dispatch {:?}", intent));
        store.dispatch(intent);
    }

    let listing = store.listing();
    if ctx.output.is_json() {
        ctx.output.json(&BrowseView {
            filters: listing.filters(),
            mode: listing.pagination().mode,
            pagination: listing.page_info(),
            has_more: listing.has_more(),
            products: listing.displayed_items(),
            cart_count: store.cart_count(),
        });
        return Ok(());
    }

    render(listing, store.cart_count(), &ctx.output);
    Ok(())
}

/// Translate command-line options into intents, in dispatch order.
///
/// Filters go first as one update, then page size and mode, and the page
/// last, since both filter and mode changes return to page 1.
fn intents(args: &BrowseArgs) -> Vec<Intent> {
    let mut intents = Vec::new();

    let mut update = FilterUpdate::new();
    if let Some(category) = &args.category {
        update = update.category(CategoryFilter::from(category.as_str()));
    }
    if let Some(query) = &args.search {
        update = update.search_query(query.as_str());
    }
    if let Some(sort) = args.sort {
        update = update.sort(sort);
    }
    if let Some(min) = args.min {
        update = update.min_price(min);
    }
    if let Some(max) = args.max {
        update = update.max_price(max);
    }
    if !update.is_empty() {
        intents.push(Intent::UpdateFilters(update));
    }

    if let Some(per_page) = args.per_page {
        intents.push(Intent::SetItemsPerPage(per_page));
    }
    if args.infinite {
        intents.push(Intent::SetPaginationMode(PaginationMode::Infinite));
    }
    if let Some(page) = args.page {
        intents.push(Intent::SetPage(page));
    }
    intents.extend(std::iter::repeat_with(|| Intent::LoadMoreResults).take(args.load_more));

    intents
}

fn render(listing: &ProductListing, cart_count: u64, output: &Output) {
    let filters = listing.filters();
    let info = listing.page_info();

    output.header(&format!(
        "{} products · {} · sorted by {}",
        info.total,
        filters.category,
        filters.sort.display_name()
    ));
    if !filters.search_query.is_empty() {
        output.kv("search", &format!("\"{}\"", filters.search_query));
    }
    output.kv(
        "price",
        &format!("${:.2} - ${:.2}", filters.min_price, filters.max_price),
    );
    println!();

    let displayed = listing.displayed_items();
    if displayed.is_empty() {
        output.info("No products match these filters.");
    } else {
        let title_width = output.title_width(40);
        let widths = [6, title_width, 10, 12];
        output.table_row(&["ID", "TITLE", "PRICE", "RATING"], &widths);
        for product in displayed {
            output.table_row(
                &[
                    &product.id.to_string(),
                    &product.title,
                    &product.unit_price().display(),
                    &format_rating(product.rating.rate),
                ],
                &widths,
            );
        }
    }
    println!();

    match listing.pagination().mode {
        PaginationMode::Paged => {
            output.kv(
                "page",
                &format!(
                    "{} of {} (items {}-{})",
                    info.page,
                    info.total_pages,
                    info.start_item(),
                    info.end_item()
                ),
            );
            let pages: Vec<String> = info
                .page_numbers(7)
                .iter()
                .map(|n| {
                    if *n == info.page {
                        format!("[{}]", n)
                    } else {
                        n.to_string()
                    }
                })
                .collect();
            output.kv("pages", &pages.join(" "));
        }
        PaginationMode::Infinite => {
            output.kv(
                "showing",
                &format!("{} of {}", displayed.len(), listing.total_items()),
            );
            if listing.has_more() {
                output.info("More results available (use --load-more).");
            }
        }
    }
    output.kv("cart", &format!("{} item(s)", cart_count));
}
