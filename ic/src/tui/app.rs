//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::composer::{Composer, OutputAction};

use super::input::TextInput;
use super::state::{AppState, Field, FormPhase};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance over a freshly opened form
    pub fn new(composer: &Composer) -> Self {
        Self {
            state: AppState::from_form(composer.catalog().clone(), composer.open_form()),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Cancelling moves the form to [`FormPhase::Cancelled`]; submitting
    /// only queues the action in `pending_submit` for the runner.
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(?key, focus = ?self.state.focus, "App::handle_key: called");

        if self.state.show_help {
            self.handle_help_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.state.phase = FormPhase::Cancelled;
            }

            // === Help ===
            (KeyCode::F(1), _) => {
                self.state.show_help = true;
            }

            // === Actions ===
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.state.request_submit(OutputAction::Paste);
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                self.state.request_submit(OutputAction::Copy);
            }

            // === Focus ===
            (KeyCode::Tab, _) => {
                self.state.focus = self.state.focus.next();
            }
            (KeyCode::BackTab, _) => {
                self.state.focus = self.state.focus.prev();
            }

            _ => match self.state.focus {
                Field::Task => self.handle_text_key(key, Field::Task),
                Field::Mood => self.handle_mood_key(key),
                Field::Reason => self.handle_text_key(key, Field::Reason),
            },
        }
    }

    /// Any key closes the help overlay; Ctrl+C still quits
    fn handle_help_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_help_key: called");
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.state.phase = FormPhase::Cancelled;
        }
        self.state.show_help = false;
    }

    /// Handle key in the task or reason text field
    fn handle_text_key(&mut self, key: KeyEvent, field: Field) {
        let input: &mut TextInput = match field {
            Field::Reason => &mut self.state.reason,
            _ => &mut self.state.task,
        };

        let edited = match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                input.insert(c);
                true
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_home();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            KeyCode::Up => {
                self.state.focus = field.prev();
                false
            }
            KeyCode::Down => {
                self.state.focus = field.next();
                false
            }
            KeyCode::Enter => {
                if field == Field::Reason {
                    debug!("App::handle_text_key: Enter in reason - primary action");
                    self.state.request_submit(OutputAction::Paste);
                } else {
                    self.state.focus = field.next();
                }
                false
            }
            _ => false,
        };

        if edited && field == Field::Task {
            self.state.task_edited();
        }
    }

    /// Handle key in the mood tag picker
    fn handle_mood_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.highlight_prev(),
            KeyCode::Down => self.state.highlight_next(),
            KeyCode::Enter => self.state.toggle_highlighted(),
            KeyCode::Char(' ') if self.state.mood_filter.is_empty() => self.state.toggle_highlighted(),
            KeyCode::Backspace => {
                if self.state.mood_filter.is_empty() {
                    self.state.remove_last_mood();
                } else {
                    self.state.pop_filter();
                }
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.state.push_filter(c);
            }
            _ => {}
        }
    }
}
