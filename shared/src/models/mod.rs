//! Domain models

pub mod course;
pub mod menu_item;
pub mod order;

pub use course::{Course, CourseFilter};
pub use menu_item::{MenuItem, MenuItemDraft};
pub use order::OrderLine;
