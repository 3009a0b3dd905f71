//! End-to-end storefront scenarios driven purely through intents.

use lumina_core::prelude::*;
use std::sync::Arc;

/// 20 products priced $5 to $50; ids 1..=6 are electronics.
fn catalog() -> Vec<Product> {
    let prices = [
        5.0, 25.0, 12.0, 30.0, 18.0, 45.0, 7.5, 9.0, 11.0, 14.0, 16.0, 20.0, 22.0, 27.0, 33.0,
        36.0, 40.0, 42.0, 48.0, 50.0,
    ];
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let id = i as u64 + 1;
            let category = if id <= 6 { "electronics" } else { "jewelery" };
            Product::new(id, format!("Item {}", id), price, category)
                .with_rating(id as f64 % 5.0, id * 10)
        })
        .collect()
}

fn numbered(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| Product::new(id, format!("Item {}", id), 10.0, "misc"))
        .collect()
}

async fn loaded(products: Vec<Product>) -> Storefront<MemoryStore> {
    let mut store = Storefront::new(
        Arc::new(StaticCatalogSource::new(products)),
        MemoryStore::new(),
    );
    assert_eq!(store.load_catalog().await, LoadStatus::Succeeded);
    store
}

fn ids(items: &[Product]) -> Vec<u64> {
    items.iter().map(|p| p.id.get()).collect()
}

#[tokio::test]
async fn test_category_price_and_sort_combined() {
    let mut store = loaded(catalog()).await;

    store.dispatch(Intent::SetCategoryFilter(CategoryFilter::named("electronics")));
    assert_eq!(store.listing().total_items(), 6);

    store.dispatch(Intent::SetPriceRange {
        min: 10.0,
        max: 30.0,
    });
    store.dispatch(Intent::SetSortOption(SortOption::PriceAsc));

    let filtered = store.listing().filtered_items();
    assert_eq!(filtered.len(), 4);
    assert!(filtered.windows(2).all(|w| w[0].price <= w[1].price));
    assert!(filtered
        .iter()
        .all(|p| p.category == "electronics" && (10.0..=30.0).contains(&p.price)));
    assert_eq!(ids(filtered), vec![3, 5, 2, 4]);
}

#[tokio::test]
async fn test_paged_last_page() {
    let mut store = loaded(numbered(25)).await;

    store.dispatch(Intent::SetPage(3));
    let displayed = store.listing().displayed_items();
    assert_eq!(ids(displayed), vec![25]);

    let info = store.listing().page_info();
    assert_eq!(info.total_pages, 3);
    assert!(info.is_last());
}

#[tokio::test]
async fn test_infinite_scroll_reaches_end() {
    let mut store = loaded(numbered(25)).await;
    store.dispatch(Intent::SetPaginationMode(PaginationMode::Infinite));
    assert_eq!(store.listing().displayed_items().len(), 12);

    store.dispatch(Intent::LoadMoreResults);
    store.dispatch(Intent::LoadMoreResults);
    assert_eq!(store.listing().displayed_items().len(), 25);
    assert!(!store.listing().has_more());

    let before = store.listing().clone();
    store.dispatch(Intent::LoadMoreResults);
    assert_eq!(store.listing(), &before);
}

#[tokio::test]
async fn test_filter_change_resets_page() {
    let mut store = loaded(numbered(25)).await;
    store.dispatch(Intent::SetPage(2));
    assert_eq!(store.listing().pagination().current_page, 2);

    store.dispatch(Intent::SetSearchQuery("item 1".into()));
    assert_eq!(store.listing().pagination().current_page, 1);
    // "Item 1", "Item 10".."Item 19"
    assert_eq!(store.listing().total_items(), 11);
}

#[tokio::test]
async fn test_items_per_page_change_keeps_page() {
    let mut store = loaded(numbered(25)).await;
    store.dispatch(Intent::SetPage(3));
    store.dispatch(Intent::SetItemsPerPage(20));

    assert_eq!(store.listing().pagination().current_page, 3);
    assert!(store.listing().displayed_items().is_empty());
}

#[tokio::test]
async fn test_cart_flow_and_pricing() {
    let mut store = loaded(catalog()).await;
    let laptop = store.find_product(ProductId::new(1)).cloned().unwrap();
    let watch = store.find_product(ProductId::new(2)).cloned().unwrap();

    store.dispatch(Intent::AddToCart(laptop.clone()));
    store.dispatch(Intent::AddToCart(laptop.clone()));
    store.dispatch(Intent::AddQuantityToCart {
        product: watch.clone(),
        quantity: 3,
    });
    assert_eq!(store.cart().unique_item_count(), 2);
    assert_eq!(store.cart_count(), 5);

    store.dispatch(Intent::DecreaseCartQuantity(watch.id));
    let pricing = store.cart_pricing().unwrap();
    // 2 x $5.00 + 2 x $25.00
    assert_eq!(pricing.subtotal.amount_cents, 6000);
    assert_eq!(pricing.tax_total.amount_cents, 480);
    assert_eq!(pricing.grand_total.amount_cents, 6480);

    store.dispatch(Intent::RemoveFromCart(laptop.id));
    assert_eq!(store.cart_count(), 2);

    store.dispatch(Intent::ClearCart);
    assert!(store.cart().is_empty());
}

#[tokio::test]
async fn test_cart_usable_during_pending_load() {
    let mut store = Storefront::new(
        Arc::new(StaticCatalogSource::new(catalog())),
        MemoryStore::new(),
    );
    let product = Product::new(99u64, "Gift card", 25.0, "misc");

    let pending = store.begin_load();
    assert_eq!(store.status(), LoadStatus::Loading);

    store.dispatch(Intent::AddToCart(product));
    assert_eq!(store.cart_count(), 1);

    let outcome = pending.fetch().await;
    store.complete_load(outcome);

    assert_eq!(store.status(), LoadStatus::Succeeded);
    assert_eq!(store.cart_count(), 1);
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let source: Arc<dyn CatalogSource> = Arc::new(StaticCatalogSource::new(catalog()));

    let original = {
        let mut store = Storefront::new(Arc::clone(&source), FileStore::open(dir.path()).unwrap());
        store.load_catalog().await;
        store.add_to_cart_by_id(ProductId::new(7), 1).unwrap();
        store.add_to_cart_by_id(ProductId::new(4), 2).unwrap();
        store.cart().items().to_vec()
    };

    let store = Storefront::new(source, FileStore::open(dir.path()).unwrap());
    assert_eq!(store.status(), LoadStatus::Idle);
    assert_eq!(store.cart().items(), original.as_slice());
    assert_eq!(store.cart().items()[0].product.title, "Item 7");
    assert_eq!(store.cart().items()[1].quantity, 2);
}

#[tokio::test]
async fn test_corrupt_persisted_cart_starts_empty() {
    let mem = MemoryStore::new();
    mem.set(CART_STORAGE_KEY, b"\x00\x01garbage").unwrap();

    let store = Storefront::new(Arc::new(StaticCatalogSource::new(catalog())), &mem);
    assert!(store.cart().is_empty());
}

#[tokio::test]
async fn test_failed_load_then_retry() {
    let mut store = Storefront::new(
        Arc::new(StaticCatalogSource::new(catalog()).failing_products("Failed to fetch products")),
        MemoryStore::new(),
    );

    assert_eq!(store.load_catalog().await, LoadStatus::Failed);
    assert!(store.catalog().error().unwrap().contains("Failed to fetch products"));
    assert!(store.listing().items().is_empty());
    assert!(store.listing().displayed_items().is_empty());
}
