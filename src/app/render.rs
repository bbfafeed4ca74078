//! Search box rendering
//!
//! Input line on top, suggestion panel underneath while open, key hints at
//! the bottom. History candidates carry a recall marker so they read
//! differently from live suggestions, and the selected row is highlighted
//! the full width of the panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::App;

const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const HISTORY_MARKER: &str = "↺ ";
const REMOTE_MARKER: &str = "  ";

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input line
            Constraint::Min(0),    // Suggestion panel
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        frame.render_widget(&self.textarea, layout[0]);
        self.render_suggestions(frame, layout[1]);
        self.render_hint(frame, layout[2]);
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        if !self.controller.panel_open() || area.height < 3 {
            return;
        }

        let candidates = self.controller.candidates();
        let visible_count = candidates.len().min(MAX_VISIBLE_SUGGESTIONS);
        let panel_area = Rect {
            height: (visible_count as u16 + 2).min(area.height),
            ..area
        };

        let max_text_width = (panel_area.width as usize).saturating_sub(6);

        let items: Vec<ListItem> = candidates
            .iter()
            .take(MAX_VISIBLE_SUGGESTIONS)
            .enumerate()
            .map(|(idx, candidate)| {
                let from_history = idx < self.controller.history_len();
                let marker = if from_history {
                    HISTORY_MARKER
                } else {
                    REMOTE_MARKER
                };

                let display_text = truncate_to_width(candidate, max_text_width);
                // Pad so the selection bar spans the panel.
                let padding =
                    " ".repeat(max_text_width.saturating_sub(display_text.width()));

                let line = if Some(idx) == self.controller.selected() {
                    Line::from(Span::styled(
                        format!("► {}{}{}", marker, display_text, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    let text_color = if from_history {
                        Color::Yellow
                    } else {
                        Color::White
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("  {}", marker),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(display_text, Style::default().fg(text_color)),
                    ])
                };

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestions ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(list, panel_area);
    }

    fn render_hint(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.controller.panel_open() {
            "↑↓ (Ctrl J/K) navigate · Enter search · Del forget · Esc close"
        } else {
            "Ctrl+K focus · Enter search · Ctrl+U clear · Esc quit"
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(paragraph, area);
    }
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width >= max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_leaves_fitting_text_unchanged() {
        assert_eq!(truncate_to_width("cats", 10), "cats");
        assert_eq!(truncate_to_width("cats", 4), "cats");
    }

    #[test]
    fn test_truncate_stays_within_budget() {
        let truncated = truncate_to_width("cat videos", 6);
        assert!(truncated.width() <= 6);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_truncate_handles_wide_characters() {
        let truncated = truncate_to_width("検索クエリ", 5);
        assert!(truncated.width() <= 5);
    }

    #[test]
    fn test_truncate_to_zero_width_is_empty() {
        assert_eq!(truncate_to_width("cats", 0), "");
    }
}
