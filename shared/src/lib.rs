//! Shared types for the Chef Station app
//!
//! Common types used across crates: the domain models (dishes, order
//! lines), the unified error system, and small time/ID utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Course, CourseFilter, MenuItem, MenuItemDraft, OrderLine};
