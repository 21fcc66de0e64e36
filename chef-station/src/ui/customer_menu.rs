//! Customer menu screen - browsing and cart building

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use shared::MenuItem;
use tui_input::backend::crossterm::EventHandler;

use crate::router::Screen;
use crate::ui::App;

fn visible(app: &App) -> Vec<&MenuItem> {
    app.state
        .menu
        .query(app.customer_browse.search.value(), app.customer_browse.filter)
        .collect()
}

fn selected_id(app: &App) -> Option<i64> {
    visible(app).get(app.customer_browse.selected).map(|i| i.id)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.customer_browse.searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.customer_browse.searching = false,
            _ => {
                app.customer_browse.search.handle_event(&Event::Key(key));
            }
        }
        let len = visible(app).len();
        app.customer_browse.clamp_selection(len);
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.customer_browse.searching = true,
        KeyCode::Char('f') => {
            app.customer_browse.filter = app.customer_browse.filter.cycle();
            let len = visible(app).len();
            app.customer_browse.clamp_selection(len);
        }
        KeyCode::Up => app.customer_browse.select_prev(),
        KeyCode::Down => {
            let len = visible(app).len();
            app.customer_browse.select_next(len);
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            if let Some(id) = selected_id(app) {
                app.state.cart.increment(id);
            }
        }
        KeyCode::Char('-') | KeyCode::Left => {
            if let Some(id) = selected_id(app) {
                app.state.cart.decrement(id);
            }
        }
        KeyCode::Enter => {
            if app.state.cart.item_count() > 0 {
                app.router.go_to(Screen::CustomerOrder);
            } else {
                app.notify_error("Please select at least one item");
            }
        }
        // Cart contents survive leaving the flow
        KeyCode::Esc => app.router.go_to(Screen::Welcome),
        _ => {}
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let [bar_area, list_area, cart_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    let [search_area, filter_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(22)]).areas(bar_area);

    super::render_input(
        f,
        search_area,
        "Search",
        &app.customer_browse.search,
        app.customer_browse.searching,
        false,
    );
    let filter = Paragraph::new(app.customer_browse.filter.label())
        .block(Block::default().borders(Borders::ALL).title(" Course "));
    f.render_widget(filter, filter_area);

    let items = visible(app);
    render_menu_list(f, app, list_area, &items);
    render_cart_bar(f, app, cart_area);
}

fn render_menu_list(f: &mut Frame, app: &App, area: Rect, items: &[&MenuItem]) {
    let block = Block::default().borders(Borders::ALL).title(" Menu ");

    if items.is_empty() {
        let text = if app.state.menu.is_empty() {
            "The chef has not added any dishes yet. Please check back soon!"
        } else {
            "No dishes match your search."
        };
        let para = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let qty = app.state.cart.quantity(item.id);
            let qty_style = if qty > 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let head = Line::from(vec![
                Span::styled(format!("[{qty}] "), qty_style),
                Span::raw(format!("{} ", item.course.icon())),
                Span::styled(&item.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", item.course.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  {}", super::money(item.price)),
                    Style::default().fg(Color::Green),
                ),
            ]);
            let desc = Line::from(Span::styled(
                format!("      {}", item.description),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(Text::from(vec![head, desc]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("➤ ");
    let mut state = ListState::default().with_selected(Some(app.customer_browse.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_cart_bar(f: &mut Frame, app: &App, area: Rect) {
    let count = app.state.cart.item_count();
    let (line, border_style) = if count > 0 {
        let total = app.state.cart.total(&app.state.menu);
        (
            Line::from(vec![
                Span::raw(format!("🛒 {count} item{}", if count == 1 { "" } else { "s" })),
                Span::styled(
                    format!("  {}", super::money(total)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ·  Enter to review", Style::default().fg(Color::Gray)),
            ]),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            Line::from(Span::styled(
                "Cart is empty. Use + to add the selected dish.",
                Style::default().fg(Color::DarkGray),
            )),
            Style::default(),
        )
    };

    let para = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cart ")
            .border_style(border_style),
    );
    f.render_widget(para, area);
}
