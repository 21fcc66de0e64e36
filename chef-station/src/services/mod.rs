//! Domain services
//!
//! - [`MenuService`]: dish catalog CRUD plus search/filter projection
//! - [`Cart`]: per-session quantity accumulation
//! - [`OrderBook`]: committed order lines and receipt aggregation

pub mod cart;
pub mod menu;
pub mod orders;

pub use cart::Cart;
pub use menu::{MenuService, MAX_DESCRIPTION_LEN, MAX_DISH_NAME_LEN};
pub use orders::{OrderBook, Receipt, ReceiptItem};
