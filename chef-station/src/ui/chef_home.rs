//! Chef dashboard - menu management

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
        .query(app.chef_browse.search.value(), app.chef_browse.filter)
        .collect()
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.chef_browse.searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.chef_browse.searching = false,
            _ => {
                app.chef_browse.search.handle_event(&Event::Key(key));
            }
        }
        let len = visible(app).len();
        app.chef_browse.clamp_selection(len);
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.chef_browse.searching = true,
        KeyCode::Char('f') => {
            app.chef_browse.filter = app.chef_browse.filter.cycle();
            let len = visible(app).len();
            app.chef_browse.clamp_selection(len);
        }
        KeyCode::Up => app.chef_browse.select_prev(),
        KeyCode::Down => {
            let len = visible(app).len();
            app.chef_browse.select_next(len);
        }
        KeyCode::Char('a') => {
            app.dish_form.reset();
            app.router.go_to(Screen::ChefAdd);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            let item = visible(app)
                .get(app.chef_browse.selected)
                .map(|i| (*i).clone());
            if let Some(item) = item {
                app.dish_form.load(&item);
                app.router.open_edit(item.id);
            }
        }
        KeyCode::Char('d') => {
            let id = visible(app).get(app.chef_browse.selected).map(|i| i.id);
            if let Some(id) = id {
                app.confirm_delete = Some(id);
            }
        }
        KeyCode::Char('o') => app.router.go_to(Screen::ChefOrders),
        KeyCode::Esc => {
            app.router.go_to(Screen::Welcome);
            app.notify_info("Signed out");
        }
        _ => {}
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let [bar_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [search_area, filter_area, stats_area] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(22),
        Constraint::Length(24),
    ])
    .areas(bar_area);

    super::render_input(
        f,
        search_area,
        "Search",
        &app.chef_browse.search,
        app.chef_browse.searching,
        false,
    );

    let filter = Paragraph::new(app.chef_browse.filter.label())
        .block(Block::default().borders(Borders::ALL).title(" Course "));
    f.render_widget(filter, filter_area);

    let stats = Paragraph::new(format!(
        "{} dishes · {} lines",
        app.state.menu.len(),
        app.state.orders.len()
    ))
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL).title(" Totals "));
    f.render_widget(stats, stats_area);

    let items = visible(app);
    render_dish_list(f, app, list_area, &items);
}

fn render_dish_list(f: &mut Frame, app: &App, area: Rect, items: &[&MenuItem]) {
    let block = Block::default().borders(Borders::ALL).title(" Menu ");

    if items.is_empty() {
        let text = if app.state.menu.is_empty() {
            "No dishes yet. Press a to add your first dish."
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
            let head = Line::from(vec![
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
                format!("   {}", item.description),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(Text::from(vec![head, desc]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("➤ ");
    let mut state = ListState::default().with_selected(Some(app.chef_browse.selected));
    f.render_stateful_widget(list, area, &mut state);
}
