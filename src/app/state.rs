use std::time::Duration;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::search::{Filter, SearchController};

/// Coarse event-loop tick for draining worker responses
const TICK: Duration = Duration::from_millis(50);

/// Application state: the controller plus terminal input glue
pub struct App {
    pub textarea: TextArea<'static>,
    pub controller: SearchController,
    pub filter: Filter,
    submitted: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(controller: SearchController, filter: Filter) -> Self {
        // Single-line query input
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        let mut app = Self {
            textarea,
            controller,
            filter,
            submitted: None,
            should_quit: false,
        };

        // Start focused with the panel showing recent history.
        app.controller.focus();
        app.controller.clear();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The committed query handed to the router, if the user submitted
    pub fn into_submission(self) -> Option<(String, Filter)> {
        let filter = self.filter;
        self.submitted.map(|query| (query, filter))
    }

    pub(super) fn set_submission(&mut self, query: String) {
        self.submitted = Some(query);
    }

    /// Service the debounce timer and any arrived fetch results
    pub fn tick(&mut self) {
        if self.controller.tick() {
            self.sync_input_to_controller();
        }
    }

    /// How long the event loop may sleep before the next tick
    ///
    /// Wakes early when a debounced fetch is about to fire.
    pub fn poll_timeout(&self) -> Duration {
        self.controller
            .suggest
            .time_until_ready()
            .unwrap_or(TICK)
            .min(TICK)
    }

    /// Current contents of the input line
    pub fn input_line(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Push the edited input text into the controller
    pub(super) fn sync_controller_to_input(&mut self) {
        let line = self.input_line().to_string();
        if line != self.controller.query() {
            self.controller.change_query(&line);
        }
    }

    /// Overwrite the input line with the controller's query (previews,
    /// restores, submit reset)
    pub(super) fn sync_input_to_controller(&mut self) {
        if self.input_line() != self.controller.query() {
            let text = self.controller.query().to_string();
            self.set_input(&text);
        }
    }

    fn set_input(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
