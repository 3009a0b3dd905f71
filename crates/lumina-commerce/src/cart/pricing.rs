//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat estimated sales tax applied to the subtotal.
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// Pricing breakdown for a cart. Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// `subtotal * TAX_RATE_PERCENT / 100`, rounded to the cent.
    pub tax_total: Money,
    /// `subtotal + tax_total`.
    pub grand_total: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Tax rate as a display string (e.g., "8%").
    pub fn tax_rate_label(&self) -> String {
        format!("{}%", TAX_RATE_PERCENT)
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub total: Money,
}
