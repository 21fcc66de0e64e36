//! Menu Item Model

use super::course::Course;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Snowflake ID, assigned at creation and preserved across edits
    pub id: i64,
    pub name: String,
    pub description: String,
    pub course: Course,
    /// Always positive; parsed from the draft's price string
    pub price: Decimal,
}

/// Draft payload for creating or editing a menu item
///
/// Carries the price as the raw string the user typed; parsing it is part
/// of validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl MenuItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price: price.into(),
        }
    }
}

impl From<&MenuItem> for MenuItemDraft {
    /// Pre-fill the edit form from an existing item
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            course: item.course,
            price: item.price.to_string(),
        }
    }
}
