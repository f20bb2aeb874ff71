use crate::app::{App, FormFocus, InputMode};
use crate::section::{Direction, Section};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

/// Applies one terminal event to the page. Returns `false` when the user quits.
pub fn handle_event(app: &mut App, event: &Event, now: Instant) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            if !app.is_blocked() {
                handle_mouse(app, mouse, now);
            }
            true
        }
        Event::Resize(columns, _) => {
            app.on_resize(*columns);
            true
        }
        _ => true,
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    // Notifications block the page until acknowledged.
    if app.is_blocked() {
        app.dismiss_notification();
        return true;
    }

    if app.input_mode == InputMode::Editing {
        handle_form_key(app, key);
        return true;
    }

    if app.nav_open {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.nav_move(Direction::Forward),
            KeyCode::Char('k') | KeyCode::Up => app.nav_move(Direction::Backward),
            KeyCode::Enter => app.nav_confirm(),
            KeyCode::Char('m') | KeyCode::Esc => app.toggle_nav(),
            KeyCode::Char('q') => return false,
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Char('j') | KeyCode::Down => app.on_arrow(Direction::Forward),
        KeyCode::Char('k') | KeyCode::Up => app.on_arrow(Direction::Backward),
        KeyCode::Char('m') => app.toggle_nav(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.set_active_section(Section::ALL[index]);
        }
        KeyCode::Char('h') => app.on_cta_click(),
        KeyCode::Left if app.active_section() == Section::Works => app.carousel.prev(),
        KeyCode::Right if app.active_section() == Section::Works => app.carousel.next(),
        KeyCode::PageUp => app.scroll_content(true),
        KeyCode::PageDown => app.scroll_content(false),
        KeyCode::Enter | KeyCode::Tab if app.active_section() == Section::Hire => {
            app.start_editing();
        }
        _ => {}
    }
    true
}

fn handle_form_key(app: &mut App, key: &KeyEvent) {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Tab | KeyCode::Down => app.focus_step(Direction::Forward),
        KeyCode::BackTab | KeyCode::Up => app.focus_step(Direction::Backward),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => match app.focus {
            FormFocus::Service(_) => app.toggle_focused_service(),
            FormFocus::Field(_) | FormFocus::Submit => app.submit_form(),
        },
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.on_wheel_ticks(1, now),
        MouseEventKind::ScrollUp => app.on_wheel_ticks(-1, now),
        MouseEventKind::Down(MouseButton::Left) => app.on_touch_start(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.on_touch_end(mouse.row),
        _ => {}
    }
}
