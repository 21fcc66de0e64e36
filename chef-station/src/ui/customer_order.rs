//! Customer order screen - review cart and submit

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;
use tui_input::backend::crossterm::EventHandler;

use crate::router::Screen;
use crate::ui::App;
use crate::ui::forms::OrderField;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Back to browsing keeps the cart intact
        KeyCode::Esc => app.router.go_to(Screen::CustomerMenu),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
            app.order_form.focus_toggle();
        }
        KeyCode::Enter => place_order(app),
        _ => {
            app.order_form.focused_mut().handle_event(&Event::Key(key));
        }
    }
}

fn place_order(app: &mut App) {
    let result = app.state.orders.submit(
        &mut app.state.cart,
        app.order_form.customer_name.value(),
        app.order_form.special_requests.value(),
    );
    match result {
        Ok(_) => {
            app.order_form.reset();
            app.router.go_to(Screen::CustomerMenu);
            app.notify_success("Order placed! Your order has been sent to the chef.");
        }
        Err(e) => app.notify_error(e.message),
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let [summary_area, name_area, requests_area] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    render_summary(f, app, summary_area);

    let focus = app.order_form.focus;
    super::render_input(
        f,
        name_area,
        "Your Name",
        &app.order_form.customer_name,
        focus == OrderField::CustomerName,
        false,
    );
    super::render_input(
        f,
        requests_area,
        "Special Requests (optional)",
        &app.order_form.special_requests,
        focus == OrderField::SpecialRequests,
        false,
    );
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let total = app.state.cart.total(&app.state.menu);
    let title = format!(" Order Summary · {} ", super::money(total));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let mut lines = Vec::new();
    for (id, qty) in app.state.cart.entries() {
        // Dishes deleted mid-session drop out of the summary
        if let Some(item) = app.state.menu.get(id) {
            let line_total = (item.price * Decimal::from(qty)).round_dp(2);
            lines.push(Line::from(vec![
                Span::raw(format!("{qty}× ")),
                Span::raw(format!("{} {}", item.course.icon(), item.name)),
                Span::styled(
                    format!("  {}", super::money(line_total)),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Your cart is empty.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
