//! Screen router
//!
//! A flat, finite set of named screens switched by a single current-screen
//! value. The item under edit is an explicit field on the router, set when
//! entering the edit screen and cleared on every exit, so stale edit
//! context cannot leak between visits.

/// The eight screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    ChefLogin,
    ChefHome,
    ChefAdd,
    ChefEdit,
    ChefOrders,
    CustomerMenu,
    CustomerOrder,
}

impl Screen {
    /// Header title
    pub const fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Christoffel's",
            Screen::ChefLogin => "Chef Login",
            Screen::ChefHome => "Chef Dashboard",
            Screen::ChefAdd => "Add New Dish",
            Screen::ChefEdit => "Edit Dish",
            Screen::ChefOrders => "Customer Orders",
            Screen::CustomerMenu => "Our Menu",
            Screen::CustomerOrder => "Your Order",
        }
    }
}

/// Current screen plus the explicit edit payload
///
/// Invariant: `editing` is `Some` exactly while the current screen is
/// [`Screen::ChefEdit`].
#[derive(Debug, Default)]
pub struct Router {
    current: Screen,
    editing: Option<i64>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// ID of the dish under edit, present only on the edit screen
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Navigate to a screen, clearing any edit context
    pub fn go_to(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current, to = ?screen, "navigate");
        self.editing = None;
        self.current = screen;
    }

    /// Enter the edit screen carrying the dish to edit
    pub fn open_edit(&mut self, item_id: i64) {
        tracing::debug!(from = ?self.current, item_id, "navigate to edit");
        self.editing = Some(item_id);
        self.current = Screen::ChefEdit;
    }
}
