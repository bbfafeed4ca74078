use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use crate::search::Mode;

use super::state::App;

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+C: exit without submitting
            KeyCode::Char('c') if ctrl => {
                self.quit();
            }

            // Enter: submit the effective query (typed or previewed)
            KeyCode::Enter => {
                if let Some(query) = self.controller.submit() {
                    self.set_submission(query);
                    self.quit();
                }
                self.sync_input_to_controller();
            }

            // Esc: close the panel; a second Esc while idle exits
            KeyCode::Esc => {
                if self.controller.mode() == Mode::Idle {
                    self.quit();
                } else {
                    self.controller.blur();
                }
            }

            // Ctrl+K doubles as the global focus shortcut
            KeyCode::Char('k') if ctrl => {
                if self.controller.mode() == Mode::Idle {
                    self.controller.focus();
                } else {
                    self.controller.prev();
                    self.sync_input_to_controller();
                }
            }
            KeyCode::Up => {
                self.controller.prev();
                self.sync_input_to_controller();
            }

            KeyCode::Char('j') if ctrl => {
                self.controller.next();
                self.sync_input_to_controller();
            }
            KeyCode::Down => {
                self.controller.next();
                self.sync_input_to_controller();
            }

            // Ctrl+U: clear the input, panel stays open
            KeyCode::Char('u') if ctrl => {
                self.controller.clear();
                self.sync_input_to_controller();
            }

            // Delete removes the selected history entry; with no selection
            // it falls through to the editor as a plain forward-delete.
            KeyCode::Delete if self.controller.selected().is_some() => {
                self.controller.delete_selected();
                self.sync_input_to_controller();
            }

            _ => {
                if self.controller.mode() == Mode::Idle {
                    // Unfocused: only the shortcuts above do anything.
                    return;
                }
                let input = Input::from(key);
                if self.textarea.input(input) {
                    self.sync_controller_to_input();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
