//! # Character Details Component
//!
//! Overlay opened from the Characters tab. Shows the record and offers
//! "Add to Favorites", which favorites the character's gender tag.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::character::CharacterRecord;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Events emitted by the details overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsEvent {
    AddToFavorites,
    Back,
}

/// Maps a key to a details action. The overlay has no state of its own.
pub fn details_event(event: &TuiEvent) -> Option<DetailsEvent> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('f') => Some(DetailsEvent::AddToFavorites),
        TuiEvent::Escape | TuiEvent::Backspace => Some(DetailsEvent::Back),
        _ => None,
    }
}

pub struct CharacterDetails<'a> {
    pub character: &'a CharacterRecord,
}

impl<'a> CharacterDetails<'a> {
    pub fn new(character: &'a CharacterRecord) -> Self {
        Self { character }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let gender = self.character.gender.as_deref().unwrap_or("unknown");

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name:   ", label),
                Span::styled(self.character.name.as_str(), value),
            ]),
            Line::from(vec![
                Span::styled("Gender: ", label),
                Span::styled(gender, value),
            ]),
        ];
        for (name, field) in self.character.detail_rows() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<8}", format!("{}:", name)), label),
                Span::raw(field),
            ]));
        }
        lines
    }
}

impl Component for CharacterDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Details ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" f/Enter Add to Favorites  Esc Back ").centered())
            .padding(Padding::uniform(1));

        frame.render_widget(Paragraph::new(self.lines()).block(block), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
