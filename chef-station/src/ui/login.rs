//! Chef login screen

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::backend::crossterm::EventHandler;

use crate::router::Screen;
use crate::ui::App;
use crate::ui::forms::LoginField;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.login_form.reset();
            app.router.go_to(Screen::Welcome);
        }
        KeyCode::Tab | KeyCode::Down => app.login_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.login_form.focus_prev(),
        KeyCode::Enter => attempt_login(app),
        _ => {
            app.login_form.focused_mut().handle_event(&Event::Key(key));
        }
    }
}

fn attempt_login(app: &mut App) {
    let result = app.auth.verify(
        app.login_form.email.value(),
        app.login_form.password.value(),
        app.login_form.access_code.value(),
    );
    match result {
        Ok(()) => {
            app.login_form.reset();
            app.router.go_to(Screen::ChefHome);
            app.notify_success("Welcome back, Chef Christoffel!");
        }
        Err(e) => app.notify_error(e.message),
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let column = super::centered_rect(44, 14, area);
    let [email, password, code, _, hint] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(column);

    let focus = app.login_form.focus;
    super::render_input(f, email, "Email", &app.login_form.email, focus == LoginField::Email, false);
    super::render_input(
        f,
        password,
        "Password",
        &app.login_form.password,
        focus == LoginField::Password,
        true,
    );
    super::render_input(
        f,
        code,
        "Access Code",
        &app.login_form.access_code,
        focus == LoginField::AccessCode,
        true,
    );

    let creds = app.auth.credentials();
    let demo = Paragraph::new(format!(
        "{} / {} / {}",
        creds.email, creds.password, creds.access_code
    ))
    .style(Style::default().fg(Color::Gray))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Demo Credentials ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(demo, hint);
}
