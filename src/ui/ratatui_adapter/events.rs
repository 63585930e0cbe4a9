//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to page actions.

use super::state::{AppState, Mode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the page
    Exit,
    /// Search term or category changed
    FilterChanged,
    /// No action taken
    Ignored,
}

/// Handle keys while browsing the list
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Enter, _) => {
            if state.current_recipe().is_none() {
                return EventResult::Ignored;
            }
            state.view_current();
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Category selector
        (KeyCode::Tab, _) => {
            state.next_category();
            EventResult::FilterChanged
        }
        (KeyCode::BackTab, _) => {
            state.prev_category();
            EventResult::FilterChanged
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::FilterChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::FilterChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.page.search_term().len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::FilterChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::FilterChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::FilterChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle keys while a recipe is open
fn handle_detail_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'), _) => {
            state.close_detail();
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.detail_scroll_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.detail_scroll_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.detail_page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.detail_page_down();
            EventResult::Continue
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return EventResult::Exit;
    }
    // Any other key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.mode == Mode::Help => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) if state.detail_open() => {
            if state.hit_areas.is_close_button(pos) {
                state.close_detail();
            } else {
                let surface = state.hit_areas.surface_at(pos);
                state.click(surface);
            }
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(category) = state.hit_areas.category_at(pos) {
                state.select_category(category);
                EventResult::FilterChanged
            } else if let Some(idx) = state.hit_areas.recipe_at(pos) {
                state.view_at(idx);
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        MouseEventKind::ScrollUp if state.detail_open() => {
            state.detail_scroll_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown if state.detail_open() => {
            state.detail_scroll_down();
            EventResult::Continue
        }
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a single terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        // Windows reports key releases too
        Event::Key(key) if key.kind != KeyEventKind::Press => EventResult::Ignored,
        Event::Key(key) => match state.mode {
            Mode::Help => handle_help_mode(state, key),
            Mode::Normal if state.detail_open() => handle_detail_mode(state, key),
            Mode::Normal => handle_normal_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}
