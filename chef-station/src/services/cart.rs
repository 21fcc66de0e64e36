//! Cart - per-session quantity accumulation
//!
//! The cart is transient state: it lives from the first quantity
//! adjustment until order submission, and survives navigation within the
//! customer flow. Keys are dish IDs; iteration order is insertion order.

use crate::services::MenuService;
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Requested quantities for the current customer session
///
/// Zero quantities are removed rather than stored, so every entry is
/// positive by construction.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    quantities: IndexMap<i64, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested quantity for a dish; 0 removes the entry
    pub fn set_quantity(&mut self, item_id: i64, qty: u32) {
        if qty == 0 {
            self.quantities.shift_remove(&item_id);
        } else {
            self.quantities.insert(item_id, qty);
        }
    }

    /// Requested quantity for a dish (0 when absent)
    pub fn quantity(&self, item_id: i64) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, item_id: i64) {
        self.set_quantity(item_id, self.quantity(item_id).saturating_add(1));
    }

    pub fn decrement(&mut self, item_id: i64) {
        self.set_quantity(item_id, self.quantity(item_id).saturating_sub(1));
    }

    /// Total number of requested items across all entries
    pub fn item_count(&self) -> u32 {
        self.quantities.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.quantities.iter().map(|(&id, &qty)| (id, qty))
    }

    /// Cart total, rounded to 2 decimal places
    ///
    /// Entries referencing a since-deleted dish contribute 0 and are
    /// silently skipped.
    pub fn total(&self, menu: &MenuService) -> Decimal {
        self.quantities
            .iter()
            .filter_map(|(&id, &qty)| {
                menu.get(id).map(|item| item.price * Decimal::from(qty))
            })
            .sum::<Decimal>()
            .round_dp(2)
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
