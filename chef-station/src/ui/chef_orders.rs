//! Chef orders screen - receipt feed

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::router::Screen;
use crate::ui::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.orders_scroll = 0;
            app.router.go_to(Screen::ChefHome);
        }
        KeyCode::Up => app.orders_scroll = app.orders_scroll.saturating_sub(1),
        KeyCode::Down => {
            let max = receipt_lines(app).len().saturating_sub(1);
            app.orders_scroll = (app.orders_scroll + 1).min(max);
        }
        _ => {}
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let receipts = app.state.orders.receipts(&app.state.menu);
    let title = format!(" Orders ({}) ", receipts.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if receipts.is_empty() {
        let para = Paragraph::new("No orders yet. They will appear here as customers place them.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let lines = receipt_lines(app);
    let para = Paragraph::new(lines)
        .scroll((app.orders_scroll as u16, 0))
        .block(block);
    f.render_widget(para, area);
}

/// Flatten all receipts into display lines, newest last
fn receipt_lines(app: &App) -> Vec<Line<'static>> {
    let receipts = app.state.orders.receipts(&app.state.menu);
    let mut lines = Vec::new();

    for receipt in receipts {
        lines.push(Line::from(vec![
            Span::styled(
                receipt.customer_name.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", super::clock(receipt.submitted_at)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  {}", super::money(receipt.total)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        for item in &receipt.items {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}× ", item.quantity)),
                Span::raw(format!("{} {}", item.course.icon(), item.name)),
                Span::styled(
                    format!("  {}", super::money(item.line_total)),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }

        if let Some(requests) = &receipt.special_requests {
            lines.push(Line::from(Span::styled(
                format!("  📝 {requests}"),
                Style::default().fg(Color::Cyan),
            )));
        }

        lines.push(Line::from(""));
    }

    lines
}
