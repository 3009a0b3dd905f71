//! The commands a view layer issues against the storefront.

use lumina_commerce::cart::CartAction;
use lumina_commerce::catalog::Product;
use lumina_commerce::search::{CategoryFilter, FilterUpdate, ListingAction, PaginationMode, SortOption};
use lumina_commerce::ProductId;

/// A view-to-core intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetCategoryFilter(CategoryFilter),
    SetSearchQuery(String),
    SetSortOption(SortOption),
    SetPriceRange { min: f64, max: f64 },
    /// Several filter fields at once; resets to page 1.
    UpdateFilters(FilterUpdate),
    SetPage(usize),
    SetItemsPerPage(usize),
    SetPaginationMode(PaginationMode),
    LoadMoreResults,
    AddToCart(Product),
    AddQuantityToCart { product: Product, quantity: u32 },
    DecreaseCartQuantity(ProductId),
    RemoveFromCart(ProductId),
    ClearCart,
    /// Start a catalog load. Dispatching this hands back a pending load.
    LoadCatalog,
}

/// Where an intent is routed.
pub(crate) enum Route {
    Listing(ListingAction),
    Cart(CartAction),
    Load,
}

impl From<Intent> for Route {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::SetCategoryFilter(c) => Route::Listing(ListingAction::SetCategory(c)),
            Intent::SetSearchQuery(q) => Route::Listing(ListingAction::SetSearchQuery(q)),
            Intent::SetSortOption(s) => Route::Listing(ListingAction::SetSort(s)),
            Intent::SetPriceRange { min, max } => {
                Route::Listing(ListingAction::SetPriceRange { min, max })
            }
            Intent::UpdateFilters(u) => Route::Listing(ListingAction::UpdateFilters(u)),
            Intent::SetPage(n) => Route::Listing(ListingAction::SetPage(n)),
            Intent::SetItemsPerPage(n) => Route::Listing(ListingAction::SetItemsPerPage(n)),
            Intent::SetPaginationMode(m) => Route::Listing(ListingAction::SetPaginationMode(m)),
            Intent::LoadMoreResults => Route::Listing(ListingAction::LoadMore),
            Intent::AddToCart(p) => Route::Cart(CartAction::AddOne(p)),
            Intent::AddQuantityToCart { product, quantity } => {
                Route::Cart(CartAction::AddQuantity { product, quantity })
            }
            Intent::DecreaseCartQuantity(id) => Route::Cart(CartAction::DecreaseOne(id)),
            Intent::RemoveFromCart(id) => Route::Cart(CartAction::Remove(id)),
            Intent::ClearCart => Route::Cart(CartAction::Clear),
            Intent::LoadCatalog => Route::Load,
        }
    }
}
