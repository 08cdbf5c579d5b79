use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::Tab;
use crate::tui::component::Component;

/// One-line tab strip with the active tab highlighted.
pub struct TabBar {
    pub active: Tab,
    /// Shown next to the Favorites title.
    pub favorites_total: usize,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = vec![
            " 1 Characters ".to_string(),
            format!(" 2 Favorites ({}) ", self.favorites_total),
        ];
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}
