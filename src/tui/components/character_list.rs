//! # Character List Component
//!
//! The Characters tab: a scrollable list of names with a gender column.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CharacterListState` lives in `TuiState` (cursor survives redraws)
//! - `CharacterList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Roster;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PAGE_SIZE: usize = 10;

/// Persistent cursor state for the list.
#[derive(Debug, Default)]
pub struct CharacterListState {
    pub selected: usize,
    /// Length of the list the cursor is clamped to; synced from the roster.
    pub len: usize,
    pub list_state: ListState,
}

impl CharacterListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-clamp the cursor after the roster changed length.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = self.len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the character list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterListEvent {
    /// Open the details view for the character at this index.
    Open(usize),
}

impl EventHandler for CharacterListState {
    type Event = CharacterListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CharacterListEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.move_by(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.move_by(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_by(-(PAGE_SIZE as isize));
                None
            }
            TuiEvent::PageDown => {
                self.move_by(PAGE_SIZE as isize);
                None
            }
            TuiEvent::Submit if self.len > 0 => Some(CharacterListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the list.
pub struct CharacterList<'a> {
    state: &'a mut CharacterListState,
    roster: &'a Roster,
}

impl<'a> CharacterList<'a> {
    pub fn new(state: &'a mut CharacterListState, roster: &'a Roster) -> Self {
        Self { state, roster }
    }
}

impl Component for CharacterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Characters ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Details  Tab Favorites  q Quit ").centered())
            .padding(Padding::horizontal(1));

        if self.roster.characters.is_empty() {
            let (message, style) = if self.roster.is_loading {
                ("Loading...".to_string(), Style::default().fg(Color::Yellow))
            } else if let Some(error) = &self.roster.error {
                (format!("Error: {}", error), Style::default().fg(Color::Red))
            } else {
                ("No characters.".to_string(), Style::default().fg(Color::DarkGray))
            };
            let empty = Paragraph::new(message)
                .style(style)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .roster
            .characters
            .iter()
            .enumerate()
            .map(|(i, character)| {
                let gender = character.gender_kind().label();
                let name_width = inner_width.saturating_sub(gender.len() + 2);
                let name = truncate_to_width(&character.name, name_width);
                let padding = name_width.saturating_sub(name.width());

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(name, style),
                    Span::styled(" ".repeat(padding + 2), style),
                    Span::styled(gender, style.add_modifier(Modifier::DIM)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to at most `max_width` display columns, adding "..." if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_characters;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &mut CharacterListState, roster: &Roster) -> String {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CharacterList::new(state, roster).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut state = CharacterListState::new();
        state.sync_len(3);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::PageUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = CharacterListState::new();
        state.sync_len(4);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(CharacterListEvent::Open(1))
        );
    }

    #[test]
    fn test_submit_on_empty_list_does_nothing() {
        let mut state = CharacterListState::new();
        state.sync_len(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_sync_len_clamps_cursor() {
        let mut state = CharacterListState::new();
        state.sync_len(10);
        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected, 9);
        state.sync_len(2);
        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_renders_names_and_genders() {
        let roster = Roster {
            characters: sample_characters(),
            ..Default::default()
        };
        let mut state = CharacterListState::new();
        state.sync_len(roster.characters.len());
        let text = render_to_string(&mut state, &roster);
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("female"));
        assert!(text.contains("unspecified"));
    }

    #[test]
    fn test_renders_loading_and_error() {
        let mut state = CharacterListState::new();
        let loading = Roster {
            is_loading: true,
            ..Default::default()
        };
        assert!(render_to_string(&mut state, &loading).contains("Loading..."));

        let failed = Roster {
            error: Some("network error: offline".to_string()),
            ..Default::default()
        };
        assert!(render_to_string(&mut state, &failed).contains("network error: offline"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Yoda", 10), "Yoda");
        assert_eq!(truncate_to_width("Obi-Wan Kenobi", 8), "Obi-W...");
        assert_eq!(truncate_to_width("Chewbacca", 2), "..");
    }
}
