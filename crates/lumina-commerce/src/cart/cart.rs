//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing, TAX_RATE_PERCENT};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A cart entry: one product at a positive quantity.
///
/// Serializes as the product's fields plus `quantity`, matching the blob
/// written by earlier storefront versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// `unit_price * quantity`, or None on overflow.
    pub fn total_price(&self) -> Option<Money> {
        self.product.unit_price().try_multiply(i64::from(self.quantity))
    }
}

/// Cart intents.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    AddOne(Product),
    /// Add `quantity` units of a product. Zero is ignored.
    AddQuantity { product: Product, quantity: u32 },
    /// Remove one unit; the line disappears when its quantity reaches zero.
    DecreaseOne(ProductId),
    /// Remove a line regardless of quantity.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

/// A shopping cart.
///
/// Holds at most one line per product id, and every line has quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from possibly untrusted line items.
    ///
    /// Duplicate ids are merged (first occurrence keeps its position) and
    /// zero-quantity lines are dropped.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            let quantity = item.quantity;
            cart.add_quantity(&item.product, quantity);
        }
        cart
    }

    /// Apply an action, returning the next state.
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddOne(product) => self.add_one(&product),
            CartAction::AddQuantity { product, quantity } => self.add_quantity(&product, quantity),
            CartAction::DecreaseOne(id) => {
                self.decrease_one(id);
            }
            CartAction::Remove(id) => {
                self.remove(id);
            }
            CartAction::Clear => self.clear(),
        }
        self
    }

    /// Add one unit of `product`.
    pub fn add_one(&mut self, product: &Product) {
        self.add_quantity(product, 1);
    }

    /// Add `quantity` units of `product`. Zero is a no-op.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.id() == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartLineItem::new(product.clone(), quantity)),
        }
    }

    /// Remove one unit of `id`, dropping the line at quantity 1.
    /// Returns false if the id is not in the cart.
    pub fn decrease_one(&mut self, id: ProductId) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Remove the line for `id`. Returns false if it was not present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get the line for `id`.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Quantity of `id` in the cart, 0 if absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal, tax, and grand total.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let currency = Currency::USD;

        let line_items = self
            .items
            .iter()
            .map(|item| {
                let total = item.total_price().ok_or(CommerceError::Overflow)?;
                Ok(LineItemPricing {
                    product_id: item.id(),
                    unit_price: item.product.unit_price(),
                    quantity: item.quantity,
                    total,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal = Money::try_sum(line_items.iter().map(|l| &l.total), currency)
            .ok_or(CommerceError::Overflow)?;
        let tax_total = subtotal.percentage(TAX_RATE_PERCENT);
        let grand_total = subtotal
            .try_add(&tax_total)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            item_count: self.item_count(),
            subtotal,
            tax_total,
            grand_total,
            line_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64) -> Product {
        Product::new(id, format!("Product {}", id), price, "misc")
    }

    #[test]
    fn test_add_one_twice_aggregates() {
        let mut cart = Cart::new();
        cart.add_one(&product(1, 10.0));
        cart.add_one(&product(1, 10.0));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_quantity() {
        let cart = Cart::new()
            .reduce(CartAction::AddQuantity {
                product: product(1, 10.0),
                quantity: 3,
            })
            .reduce(CartAction::AddQuantity {
                product: product(1, 10.0),
                quantity: 2,
            })
            .reduce(CartAction::AddOne(product(2, 5.0)));

        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.quantity_of(ProductId::new(2)), 1);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let cart = Cart::new().reduce(CartAction::AddQuantity {
            product: product(1, 10.0),
            quantity: 0,
        });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_one() {
        let mut cart = Cart::new();
        cart.add_quantity(&product(1, 10.0), 2);

        assert!(cart.decrease_one(ProductId::new(1)));
        assert_eq!(cart.quantity_of(ProductId::new(1)), 1);

        assert!(cart.decrease_one(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_one(&product(1, 10.0));
        let before = cart.clone();

        let after = cart.reduce(CartAction::DecreaseOne(ProductId::new(9)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_quantity(&product(1, 10.0), 4);
        cart.add_one(&product(2, 5.0));

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart.unique_item_count(), 1);

        let cart = cart.reduce(CartAction::Clear);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_items_normalizes() {
        let items = vec![
            CartLineItem::new(product(1, 10.0), 1),
            CartLineItem::new(product(2, 5.0), 0),
            CartLineItem::new(product(1, 10.0), 2),
        ];
        let cart = Cart::from_items(items);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 3);
    }

    #[test]
    fn test_line_item_json_shape() {
        let item = CartLineItem::new(product(1, 10.0).with_rating(4.5, 3), 2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["rating"]["count"], 3);

        let back: CartLineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add_quantity(&product(1, 10.0), 2);
        cart.add_one(&product(2, 20.0));

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.subtotal.amount_cents, 4000);
        assert_eq!(pricing.tax_total.amount_cents, 320);
        assert_eq!(pricing.grand_total.amount_cents, 4320);
        assert_eq!(pricing.line_items[0].total.amount_cents, 2000);
    }

    #[test]
    fn test_empty_cart_pricing() {
        let pricing = Cart::new().calculate_pricing().unwrap();
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.grand_total.is_zero());
        assert!(pricing.line_items.is_empty());
    }
}
