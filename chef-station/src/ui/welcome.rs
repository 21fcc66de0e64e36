//! Welcome screen - role selection

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::router::Screen;
use crate::ui::App;

const ROLES: [(&str, &str); 2] = [
    ("🍴  I'm a Customer", "Browse the menu and place an order"),
    ("👨‍🍳  I'm the Chef", "Manage the menu and view orders"),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
            app.welcome_selected = 1 - app.welcome_selected;
        }
        KeyCode::Enter => match app.welcome_selected {
            0 => app.router.go_to(Screen::CustomerMenu),
            _ => app.router.go_to(Screen::ChefLogin),
        },
        _ => {}
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let column = super::centered_rect(46, 18, area);
    let [title_area, _, first, second, _, creds_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(4),
    ])
    .areas(column);

    let title = Paragraph::new(vec![
        Line::from("Christoffel's").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("Private chef dining, made personal"),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, title_area);

    for (i, area) in [first, second].into_iter().enumerate() {
        let selected = app.welcome_selected == i;
        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (label, blurb) = ROLES[i];
        let card = Paragraph::new(vec![
            Line::from(label).style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(blurb).style(Style::default().fg(Color::Gray)),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(card, area);
    }

    // The demo triple is deliberately public
    let creds = app.auth.credentials();
    let card = Paragraph::new(vec![
        Line::from(format!("Email: {}", creds.email)),
        Line::from(format!(
            "Password: {} · Access code: {}",
            creds.password, creds.access_code
        )),
    ])
    .style(Style::default().fg(Color::Gray))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Demo Chef Sign-in ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(card, creds_area);
}
