//! Chef Station
//!
//! Terminal app for a private chef and their customers: the chef signs in
//! to manage the dish catalog and watch orders arrive; customers browse
//! the menu, build a cart and place an order. Everything lives in memory
//! for the duration of the process.
//!
//! ## Module Structure
//!
//! ```text
//! chef-station
//! ├── core/          # Configuration and top-level app state
//! ├── auth/          # Chef credential verification
//! ├── services/      # Menu catalog, cart, order book
//! ├── router         # Screen navigation
//! ├── ui/            # Ratatui screens and key handling
//! └── utils/         # Logging setup
//! ```

pub mod auth;
pub mod core;
pub mod router;
pub mod services;
pub mod ui;
pub mod utils;

pub use crate::core::{AppState, Config};
pub use crate::router::{Router, Screen};
