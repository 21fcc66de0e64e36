//! Application state
//!
//! [`AppState`] owns the two domain collections (menu, order book) and the
//! transient cart for the current customer session. It is constructed once
//! at startup, passed by reference to every handler, and dropped at
//! shutdown. There are no globals and no persistence.

use crate::services::{Cart, MenuService, OrderBook};

/// Owned application state
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | menu | MenuService | Dish catalog (insertion-ordered) |
/// | orders | OrderBook | Committed order lines, append-only |
/// | cart | Cart | Transient per-session quantities |
#[derive(Debug, Default)]
pub struct AppState {
    pub menu: MenuService,
    pub orders: OrderBook,
    pub cart: Cart,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
