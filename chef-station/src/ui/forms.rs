//! Transient form state
//!
//! Each screen with text entry owns its fields as [`tui_input::Input`]
//! values plus a focus marker. Forms are reset deterministically by the
//! navigation code, never implicitly.

use shared::{Course, CourseFilter, MenuItem, MenuItemDraft};
use tui_input::Input;

// ── Chef login ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    AccessCode,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: Input,
    pub password: Input,
    pub access_code: Input,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
            LoginField::AccessCode => &mut self.access_code,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::AccessCode,
            LoginField::AccessCode => LoginField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::AccessCode,
            LoginField::Password => LoginField::Email,
            LoginField::AccessCode => LoginField::Password,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Dish add/edit ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DishField {
    #[default]
    Name,
    Description,
    Course,
    Price,
}

#[derive(Debug, Default)]
pub struct DishForm {
    pub name: Input,
    pub description: Input,
    pub course: Course,
    pub price: Input,
    pub focus: DishField,
}

impl DishForm {
    /// Pre-fill from an existing dish (edit flow)
    pub fn load(&mut self, item: &MenuItem) {
        let draft = MenuItemDraft::from(item);
        self.name = Input::new(draft.name);
        self.description = Input::new(draft.description);
        self.course = draft.course;
        self.price = Input::new(draft.price);
        self.focus = DishField::Name;
    }

    pub fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft::new(
            self.name.value(),
            self.description.value(),
            self.course,
            self.price.value(),
        )
    }

    pub fn focused_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            DishField::Name => Some(&mut self.name),
            DishField::Description => Some(&mut self.description),
            DishField::Course => None,
            DishField::Price => Some(&mut self.price),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            DishField::Name => DishField::Description,
            DishField::Description => DishField::Course,
            DishField::Course => DishField::Price,
            DishField::Price => DishField::Name,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            DishField::Name => DishField::Price,
            DishField::Description => DishField::Name,
            DishField::Course => DishField::Description,
            DishField::Price => DishField::Course,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Menu browsing (chef home and customer menu) ─────────────────────

/// Search text, course filter and list selection for one menu view
///
/// The chef and customer screens each own an independent instance, like
/// the original's separate search/filter state pairs.
#[derive(Debug, Default)]
pub struct BrowseState {
    pub search: Input,
    pub filter: CourseFilter,
    pub selected: usize,
    /// Whether keystrokes go to the search box
    pub searching: bool,
}

impl BrowseState {
    /// Keep the selection inside the current filtered list
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ── Customer order ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderField {
    #[default]
    CustomerName,
    SpecialRequests,
}

#[derive(Debug, Default)]
pub struct OrderForm {
    pub customer_name: Input,
    pub special_requests: Input,
    pub focus: OrderField,
}

impl OrderForm {
    pub fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            OrderField::CustomerName => &mut self.customer_name,
            OrderField::SpecialRequests => &mut self.special_requests,
        }
    }

    pub fn focus_toggle(&mut self) {
        self.focus = match self.focus {
            OrderField::CustomerName => OrderField::SpecialRequests,
            OrderField::SpecialRequests => OrderField::CustomerName,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
