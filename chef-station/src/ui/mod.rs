//! Terminal UI
//!
//! One [`App`] value owns the router, the domain state and all transient
//! form state. `render` and `handle_key` dispatch on the current screen;
//! the screens themselves are free functions over `&App` / `&mut App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use rust_decimal::Decimal;
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::auth::ChefAuth;
use crate::core::{AppState, Config};
use crate::router::{Router, Screen};

pub mod forms;

mod chef_home;
mod chef_orders;
mod customer_menu;
mod customer_order;
mod dish_form;
mod login;
mod welcome;

use forms::{BrowseState, DishForm, LoginForm, OrderForm};

// ── Notices ─────────────────────────────────────────────────────────

/// Severity of a footer notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One-line feedback shown in the footer until the next keypress
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

// ── Application state ───────────────────────────────────────────────

/// Everything the UI owns
pub struct App {
    pub router: Router,
    pub state: AppState,
    pub auth: ChefAuth,

    pub login_form: LoginForm,
    pub dish_form: DishForm,
    /// Chef-side search/filter/selection
    pub chef_browse: BrowseState,
    /// Customer-side search/filter/selection, independent of the chef's
    pub customer_browse: BrowseState,
    pub order_form: OrderForm,
    /// Receipt list scroll offset on the orders screen
    pub orders_scroll: usize,
    /// Highlighted option on the welcome screen (0 customer, 1 chef)
    pub welcome_selected: usize,

    pub notice: Option<Notice>,
    /// Dish pending delete confirmation
    pub confirm_delete: Option<i64>,

    pub show_logs: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            router: Router::new(),
            state: AppState::new(),
            auth: ChefAuth::new(config.credentials.clone()),
            login_form: LoginForm::default(),
            dish_form: DishForm::default(),
            chef_browse: BrowseState::default(),
            customer_browse: BrowseState::default(),
            order_form: OrderForm::default(),
            orders_scroll: 0,
            welcome_selected: 0,
            notice: None,
            confirm_delete: None,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        });
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Success,
            text: text.into(),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        });
    }
}

// ── Key dispatch ────────────────────────────────────────────────────

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits, Ctrl-L toggles the log pane
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('l') => {
                app.show_logs = !app.show_logs;
                return;
            }
            _ => {}
        }
    }

    // Log pane scrolling while visible
    if app.show_logs {
        match key.code {
            KeyCode::PageUp => {
                app.logger_state.transition(TuiWidgetEvent::PrevPageKey);
                return;
            }
            KeyCode::PageDown => {
                app.logger_state.transition(TuiWidgetEvent::NextPageKey);
                return;
            }
            _ => {}
        }
    }

    // Pending delete confirmation swallows everything else
    if let Some(item_id) = app.confirm_delete {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.confirm_delete = None;
                match app.state.menu.remove(item_id) {
                    Ok(item) => app.notify_success(format!("Deleted \"{}\"", item.name)),
                    Err(e) => app.notify_error(e.message),
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.confirm_delete = None;
            }
            _ => {}
        }
        return;
    }

    // A notice lives until the next keypress
    app.notice = None;

    match app.router.current() {
        Screen::Welcome => welcome::handle_key(app, key),
        Screen::ChefLogin => login::handle_key(app, key),
        Screen::ChefHome => chef_home::handle_key(app, key),
        Screen::ChefAdd | Screen::ChefEdit => dish_form::handle_key(app, key),
        Screen::ChefOrders => chef_orders::handle_key(app, key),
        Screen::CustomerMenu => customer_menu::handle_key(app, key),
        Screen::CustomerOrder => customer_order::handle_key(app, key),
    }
}

// ── Rendering ───────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(f.area());

    render_header(f, app, header_area);

    let body_area = if app.show_logs {
        let [body, logs] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(10)]).areas(body_area);
        render_logs(f, app, logs);
        body
    } else {
        body_area
    };

    match app.router.current() {
        Screen::Welcome => welcome::render(f, app, body_area),
        Screen::ChefLogin => login::render(f, app, body_area),
        Screen::ChefHome => chef_home::render(f, app, body_area),
        Screen::ChefAdd | Screen::ChefEdit => dish_form::render(f, app, body_area),
        Screen::ChefOrders => chef_orders::render(f, app, body_area),
        Screen::CustomerMenu => customer_menu::render(f, app, body_area),
        Screen::CustomerOrder => customer_order::render(f, app, body_area),
    }

    render_footer(f, app, footer_area);

    if app.confirm_delete.is_some() {
        render_confirm_delete(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let screen = app.router.current();
    let line = Line::from(vec![
        Span::styled(
            " 👨‍🍳 Christoffel's ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        Span::styled(screen.title(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            (notice.text.clone(), Style::default().fg(color))
        }
        None => (hints(app).to_string(), Style::default().fg(Color::DarkGray)),
    };
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(text).style(style).block(block), area);
}

/// Footer key hints for the current screen
fn hints(app: &App) -> &'static str {
    let searching = match app.router.current() {
        Screen::ChefHome => app.chef_browse.searching,
        Screen::CustomerMenu => app.customer_browse.searching,
        _ => false,
    };
    if searching {
        return "type to search · Enter/Esc done · Ctrl-L logs";
    }
    match app.router.current() {
        Screen::Welcome => "↑/↓ select · Enter open · q quit",
        Screen::ChefLogin => "Tab next field · Enter sign in · Esc back",
        Screen::ChefHome => {
            "a add · e edit · d delete · o orders · / search · f filter · ↑/↓ select · Esc sign out"
        }
        Screen::ChefAdd | Screen::ChefEdit => "Tab next field · ←/→ course · Enter save · Esc cancel",
        Screen::ChefOrders => "↑/↓ scroll · Esc back",
        Screen::CustomerMenu => {
            "+/- quantity · Enter review order · / search · f filter · Esc back"
        }
        Screen::CustomerOrder => "Tab switch field · Enter place order · Esc back",
    }
}

fn render_logs(f: &mut Frame, app: &App, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(Block::default().borders(Borders::ALL).title(" Logs "))
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Green))
        .style_debug(Style::default().fg(Color::Gray))
        .state(&app.logger_state);
    f.render_widget(widget, area);
}

fn render_confirm_delete(f: &mut Frame, app: &App) {
    let name = app
        .confirm_delete
        .and_then(|id| app.state.menu.get(id))
        .map(|item| item.name.as_str())
        .unwrap_or("this dish");

    let area = centered_rect(50, 5, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Delete Dish ")
        .border_style(Style::default().fg(Color::Red));
    let text = vec![
        Line::from(format!("Are you sure you want to delete \"{name}\"?")),
        Line::from(""),
        Line::from(Span::styled(
            "y delete · n cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(text).block(block), area);
}

// ── Shared widgets and formatting ───────────────────────────────────

/// Fixed-size rect centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bordered single-line text input with horizontal scroll and cursor
///
/// `mask` replaces the value with `*` for password-style fields.
fn render_input(f: &mut Frame, area: Rect, label: &str, input: &Input, focused: bool, mask: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(inner_width.saturating_sub(1));
    let value = if mask {
        "*".repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let para = Paragraph::new(value).scroll((0, scroll as u16)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {label} "))
            .border_style(border_style),
    );
    f.render_widget(para, area);

    if focused {
        let x = area.x + 1 + input.visual_cursor().saturating_sub(scroll) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position((x.min(max_x), area.y + 1));
    }
}

/// Rand-prefixed money text, always 2 decimal places
fn money(amount: Decimal) -> String {
    format!("R{amount:.2}")
}

/// Local wall-clock time of a UTC-millis timestamp
fn clock(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
