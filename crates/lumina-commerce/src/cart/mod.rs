//! Cart module.
//!
//! Contains the cart reducer, pricing breakdown, and the persistent store.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartAction, CartLineItem};
pub use pricing::{CartPricing, LineItemPricing, TAX_RATE_PERCENT};
pub use store::{CartStore, CART_STORAGE_KEY};
