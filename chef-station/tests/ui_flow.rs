//! Key-driven walkthrough of the whole app: every screen is exercised
//! through the same `handle_key` path the event loop uses.

use chef_station::core::Config;
use chef_station::router::Screen;
use chef_station::ui::{self, App, NoticeLevel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

fn press(app: &mut App, code: KeyCode) {
    ui::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn demo_app() -> App {
    App::new(&Config::with_credentials("chef@christoffel.com", "chef123", "2024"))
}

/// Render the current screen into an off-screen buffer and flatten it
/// to plain text, row by row.
fn render_text(app: &App) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_chef_and_customer_walkthrough() {
    let mut app = demo_app();
    assert_eq!(app.router.current(), Screen::Welcome);

    // Welcome: pick the chef entry
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefLogin);

    // Empty credentials are rejected in place
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefLogin);
    assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));

    // Sign in
    type_text(&mut app, "chef@christoffel.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "chef123");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2024");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefHome);

    // Add a main
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.router.current(), Screen::ChefAdd);
    type_text(&mut app, "Beef Wellington");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Classic with duxelles");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right); // Starters -> Mains
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "250");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefHome);
    assert_eq!(app.state.menu.len(), 1);

    // Incomplete form stays on the screen with an error
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefAdd);
    assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
    press(&mut app, KeyCode::Esc);

    // Add a dessert
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Lemon Tart");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Zesty shortcrust");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right); // Starters -> Mains -> Desserts
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "80");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.menu.len(), 2);

    // Edit the first dish's price
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.router.current(), Screen::ChefEdit);
    let editing = app.router.editing().unwrap();
    assert_eq!(app.state.menu.get(editing).unwrap().name, "Beef Wellington");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab); // Name -> Description -> Course -> Price
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "260");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefHome);
    assert_eq!(app.router.editing(), None);
    assert_eq!(
        app.state.menu.get(editing).unwrap().price,
        "260".parse().unwrap()
    );

    // Delete the dessert, with one cancelled attempt first
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.confirm_delete.is_some());
    press(&mut app, KeyCode::Char('n'));
    assert!(app.confirm_delete.is_none());
    assert_eq!(app.state.menu.len(), 2);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.state.menu.len(), 1);

    // Sign out, re-enter as a customer
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.router.current(), Screen::Welcome);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::CustomerMenu);

    // Order two Wellingtons
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.state.cart.item_count(), 2);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::CustomerOrder);
    type_text(&mut app, "Alice");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "extra sauce");
    press(&mut app, KeyCode::Enter);

    // Back on the menu with an empty cart and a committed order
    assert_eq!(app.router.current(), Screen::CustomerMenu);
    assert!(app.state.cart.is_empty());
    let receipts = app.state.orders.receipts(&app.state.menu);
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].customer_name, "Alice");
    assert_eq!(receipts[0].special_requests.as_deref(), Some("extra sauce"));
    assert_eq!(receipts[0].total, "520.00".parse().unwrap());
}

#[test]
fn test_empty_cart_cannot_reach_order_screen() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Enter); // customer entry is preselected
    assert_eq!(app.router.current(), Screen::CustomerMenu);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::CustomerMenu);
    assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn test_cart_survives_leaving_the_customer_flow() {
    let mut app = demo_app();
    let dish = app
        .state
        .menu
        .add(&shared::MenuItemDraft::new(
            "Soup",
            "Tomato",
            shared::Course::Starters,
            "40",
        ))
        .unwrap();

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.state.cart.quantity(dish.id), 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.router.current(), Screen::Welcome);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.cart.quantity(dish.id), 1);
}

#[test]
fn test_welcome_screen_shows_demo_credentials() {
    let app = demo_app();
    let text = render_text(&app);
    assert!(text.contains("chef@christoffel.com"));
    assert!(text.contains("chef123"));
    assert!(text.contains("2024"));
}

#[test]
fn test_login_screen_shows_demo_credentials() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current(), Screen::ChefLogin);

    let text = render_text(&app);
    assert!(text.contains("chef@christoffel.com / chef123 / 2024"));
}

#[test]
fn test_dish_form_shows_live_character_counters() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "chef@christoffel.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "chef123");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2024");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.router.current(), Screen::ChefAdd);

    type_text(&mut app, "Soup");
    let text = render_text(&app);
    assert!(text.contains("Dish Name (4/50)"));
    assert!(text.contains("Description (0/200)"));

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Tomato");
    let text = render_text(&app);
    assert!(text.contains("Description (6/200)"));
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let mut app = demo_app();
    ui::handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit);
}
