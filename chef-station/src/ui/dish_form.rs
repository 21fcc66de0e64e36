//! Dish add/edit form
//!
//! One form serves both screens; which service call it commits to is
//! decided by the router's edit payload.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::backend::crossterm::EventHandler;

use crate::router::Screen;
use crate::services::{MAX_DESCRIPTION_LEN, MAX_DISH_NAME_LEN};
use crate::ui::App;
use crate::ui::forms::DishField;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.dish_form.reset();
            app.router.go_to(Screen::ChefHome);
        }
        KeyCode::Tab | KeyCode::Down => app.dish_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.dish_form.focus_prev(),
        KeyCode::Enter => save(app),
        KeyCode::Left if app.dish_form.focus == DishField::Course => {
            app.dish_form.course = app.dish_form.course.prev();
        }
        KeyCode::Right if app.dish_form.focus == DishField::Course => {
            app.dish_form.course = app.dish_form.course.next();
        }
        _ => {
            if let Some(input) = app.dish_form.focused_mut() {
                input.handle_event(&Event::Key(key));
            }
        }
    }
}

fn save(app: &mut App) {
    let draft = app.dish_form.to_draft();
    let result = match app.router.editing() {
        Some(id) => app
            .state
            .menu
            .update(id, &draft)
            .map(|_| "Menu item updated successfully!"),
        None => app
            .state
            .menu
            .add(&draft)
            .map(|_| "Menu item added successfully!"),
    };
    match result {
        Ok(message) => {
            app.dish_form.reset();
            app.router.go_to(Screen::ChefHome);
            app.notify_success(message);
        }
        Err(e) => app.notify_error(e.message),
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let column = super::centered_rect(50, 15, area);
    let [name, description, course, price] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(column);

    let focus = app.dish_form.focus;
    let name_label = format!(
        "Dish Name ({}/{})",
        app.dish_form.name.value().chars().count(),
        MAX_DISH_NAME_LEN
    );
    super::render_input(
        f,
        name,
        &name_label,
        &app.dish_form.name,
        focus == DishField::Name,
        false,
    );
    let description_label = format!(
        "Description ({}/{})",
        app.dish_form.description.value().chars().count(),
        MAX_DESCRIPTION_LEN
    );
    super::render_input(
        f,
        description,
        &description_label,
        &app.dish_form.description,
        focus == DishField::Description,
        false,
    );
    render_course_picker(f, app, course, focus == DishField::Course);
    super::render_input(
        f,
        price,
        "Price (R)",
        &app.dish_form.price,
        focus == DishField::Price,
        false,
    );
}

fn render_course_picker(f: &mut Frame, app: &App, area: Rect, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let course = app.dish_form.course;
    let text = format!("‹  {} {}  ›", course.icon(), course.label());
    let para = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Course ")
            .border_style(border_style),
    );
    f.render_widget(para, area);
}
