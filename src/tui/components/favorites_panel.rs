//! # Favorites Panel Component
//!
//! The Favorites tab: totals per bucket and the log of favorited tags.
//! Stateless, all data comes in as props.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::favorites::{Bucket, FavoritesState};
use crate::tui::component::Component;

pub struct FavoritesPanel<'a> {
    pub favorites: &'a FavoritesState,
}

impl<'a> FavoritesPanel<'a> {
    pub fn new(favorites: &'a FavoritesState) -> Self {
        Self { favorites }
    }

    fn totals(&self) -> Vec<Line<'static>> {
        Bucket::ALL
            .iter()
            .map(|bucket| {
                Line::from(vec![
                    Span::raw(format!("Total {} Characters: ", bucket.label())),
                    Span::styled(
                        self.favorites.count(*bucket).to_string(),
                        Style::default().fg(bucket_color(*bucket)).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    }

    fn log_line(&self) -> Line<'a> {
        if self.favorites.characters.is_empty() {
            return Line::styled("Nothing favorited yet.", Style::default().fg(Color::DarkGray));
        }
        let tags: Vec<&str> = self
            .favorites
            .characters
            .iter()
            .map(|tag| tag.as_deref().unwrap_or("unknown"))
            .collect();
        Line::from(tags.join(", "))
    }
}

fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::Male => Color::Cyan,
        Bucket::Female => Color::Magenta,
        Bucket::Other => Color::Yellow,
    }
}

impl Component for FavoritesPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [totals_area, log_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

        let totals = Paragraph::new(self.totals()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Favorites ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(totals, totals_area);

        let log = Paragraph::new(self.log_line())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" Log ({}) ", self.favorites.total()))
                    .title_bottom(Line::from(" r Reset  Tab Characters  q Quit ").centered())
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(log, log_area);
    }
}
