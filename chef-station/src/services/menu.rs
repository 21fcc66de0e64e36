//! Menu Service - dish catalog CRUD with search/filter projection
//!
//! The catalog is a flat, insertion-ordered collection. All mutation goes
//! through draft validation; the UI never constructs a [`MenuItem`]
//! directly.

use rust_decimal::Decimal;
use shared::util::snowflake_id;
use shared::{AppError, AppResult, Course, CourseFilter, ErrorCode, MenuItem, MenuItemDraft};

// ── Text length limits ──────────────────────────────────────────────

/// Dish names
pub const MAX_DISH_NAME_LEN: usize = 50;

/// Dish descriptions
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Validated draft fields, ready to commit
struct ValidatedDraft {
    name: String,
    description: String,
    course: Course,
    price: Decimal,
}

/// Dish catalog
#[derive(Debug, Default)]
pub struct MenuService {
    items: Vec<MenuItem>,
}

impl MenuService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it as a new dish
    pub fn add(&mut self, draft: &MenuItemDraft) -> AppResult<MenuItem> {
        let valid = self.validate(draft, None)?;
        let item = MenuItem {
            id: snowflake_id(),
            name: valid.name,
            description: valid.description,
            course: valid.course,
            price: valid.price,
        };
        self.items.push(item.clone());
        tracing::info!(id = item.id, name = %item.name, "dish added");
        Ok(item)
    }

    /// Validate a draft and replace the dish in place, preserving its ID
    /// and insertion position
    pub fn update(&mut self, id: i64, draft: &MenuItemDraft) -> AppResult<MenuItem> {
        let valid = self.validate(draft, Some(id))?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;
        item.name = valid.name;
        item.description = valid.description;
        item.course = valid.course;
        item.price = valid.price;
        let item = item.clone();
        tracing::info!(id = item.id, name = %item.name, "dish updated");
        Ok(item)
    }

    /// Remove a dish unconditionally
    ///
    /// Confirmation is a UI concern. Order lines referencing the dish are
    /// left in place and dropped from receipts at display time.
    pub fn remove(&mut self, id: i64) -> AppResult<MenuItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;
        let item = self.items.remove(pos);
        tracing::info!(id = item.id, name = %item.name, "dish removed");
        Ok(item)
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Search/filter projection over the catalog
    ///
    /// Case-insensitive substring match against name OR description when
    /// `search` is non-blank, AND exact course match unless the filter is
    /// `All`. Lazy and restartable; yields in insertion order.
    pub fn query<'a>(
        &'a self,
        search: &str,
        filter: CourseFilter,
    ) -> impl Iterator<Item = &'a MenuItem> {
        let needle = search.trim().to_lowercase();
        self.items.iter().filter(move |item| {
            let text_match = needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle);
            text_match && filter.matches(item.course)
        })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate a draft against the catalog
    ///
    /// `exclude` is the ID of the dish being edited, skipped by the
    /// duplicate-name check so a dish can keep its own name.
    fn validate(&self, draft: &MenuItemDraft, exclude: Option<i64>) -> AppResult<ValidatedDraft> {
        let name = draft.name.trim();
        let description = draft.description.trim();
        let price_text = draft.price.trim();

        if name.is_empty() || description.is_empty() || price_text.is_empty() {
            tracing::warn!("dish draft rejected: missing required fields");
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Please fill in all fields",
            ));
        }

        if name.chars().count() > MAX_DISH_NAME_LEN {
            tracing::warn!(len = name.chars().count(), "dish draft rejected: name too long");
            return Err(AppError::with_message(
                ErrorCode::DishNameTooLong,
                format!("Dish name must be {MAX_DISH_NAME_LEN} characters or less"),
            ));
        }

        if description.chars().count() > MAX_DESCRIPTION_LEN {
            tracing::warn!(
                len = description.chars().count(),
                "dish draft rejected: description too long"
            );
            return Err(AppError::with_message(
                ErrorCode::DishDescriptionTooLong,
                format!("Description must be {MAX_DESCRIPTION_LEN} characters or less"),
            ));
        }

        let price: Decimal = price_text.parse().map_err(|_| {
            tracing::warn!(price = %price_text, "dish draft rejected: invalid price");
            AppError::with_message(ErrorCode::DishInvalidPrice, "Please enter a valid price")
        })?;
        if price <= Decimal::ZERO {
            tracing::warn!(price = %price_text, "dish draft rejected: invalid price");
            return Err(AppError::with_message(
                ErrorCode::DishInvalidPrice,
                "Please enter a valid price",
            ));
        }

        let name_lower = name.to_lowercase();
        let duplicate = self
            .items
            .iter()
            .filter(|i| Some(i.id) != exclude)
            .any(|i| i.name.to_lowercase() == name_lower);
        if duplicate {
            tracing::warn!(name = %name, "dish draft rejected: duplicate name");
            return Err(AppError::with_message(
                ErrorCode::DuplicateDishName,
                "This dish name already exists. Please choose a different name.",
            ));
        }

        Ok(ValidatedDraft {
            name: name.to_string(),
            description: description.to_string(),
            course: draft.course,
            price,
        })
    }
}
