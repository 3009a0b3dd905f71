//! Persistent cart store.

use crate::cart::{Cart, CartAction, CartLineItem, CartPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use lumina_cache::{Cache, KvStore};

/// Storage key the cart's line items are persisted under.
pub const CART_STORAGE_KEY: &str = "lumina_cart";

/// A cart backed by a key-value store.
///
/// Every mutation is written through before `dispatch` returns. Storage
/// problems never surface to the caller: a failed read yields an empty cart
/// and a failed write leaves the in-memory cart authoritative.
pub struct CartStore<S: KvStore> {
    cart: Cart,
    cache: Cache<S>,
}

impl<S: KvStore> CartStore<S> {
    /// Open the cart persisted in `store`, or an empty cart if there is none
    /// or it cannot be read.
    pub fn open(store: S) -> Self {
        let cache = Cache::new(store);
        let cart = match load_items(&cache) {
            Ok(Some(items)) => {
                let cart = Cart::from_items(items);
                tracing::debug!(lines = cart.unique_item_count(), "Restored persisted cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable persisted cart");
                Cart::new()
            }
        };
        Self { cart, cache }
    }

    /// Apply a cart intent and persist the result.
    pub fn dispatch(&mut self, action: CartAction) {
        let clearing = matches!(action, CartAction::Clear);
        self.cart = std::mem::take(&mut self.cart).reduce(action);

        let result = if clearing {
            self.cache.delete(CART_STORAGE_KEY).map_err(CommerceError::from)
        } else {
            self.persist()
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
    }

    pub fn add_one(&mut self, product: &Product) {
        self.dispatch(CartAction::AddOne(product.clone()));
    }

    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        self.dispatch(CartAction::AddQuantity {
            product: product.clone(),
            quantity,
        });
    }

    pub fn decrease_one(&mut self, id: ProductId) {
        self.dispatch(CartAction::DecreaseOne(id));
    }

    pub fn remove(&mut self, id: ProductId) {
        self.dispatch(CartAction::Remove(id));
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.calculate_pricing()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(CART_STORAGE_KEY, &self.cart)?;
        Ok(())
    }
}

fn load_items<S: KvStore>(cache: &Cache<S>) -> Result<Option<Vec<CartLineItem>>, CommerceError> {
    Ok(cache.get::<Vec<CartLineItem>>(CART_STORAGE_KEY)?)
}
