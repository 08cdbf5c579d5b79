//! # TitleBar Component
//!
//! Top status bar: app name, how many characters are loaded, and the
//! current status message.
//!
//! Stateless. It receives everything as props and renders a single line:
//!
//! 1. **Loading**: `"Holonet | loading... | Loading characters..."`
//! 2. **Status message**: `"Holonet | 10 characters | Loaded 10 characters"`
//! 3. **Default**: `"Holonet | 10 characters"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub character_count: usize,
    pub is_loading: bool,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(character_count: usize, is_loading: bool, status_message: String) -> Self {
        Self {
            character_count,
            is_loading,
            status_message,
        }
    }

    fn text(&self) -> String {
        let count = if self.is_loading {
            "loading...".to_string()
        } else {
            format!("{} characters", self.character_count)
        };
        if self.status_message.is_empty() {
            format!("Holonet | {}", count)
        } else {
            format!("Holonet | {} | {}", count, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(10, false, "Loaded 10 characters".to_string());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Holonet"));
        assert!(text.contains("10 characters"));
        assert!(text.contains("Loaded 10 characters"));
    }

    #[test]
    fn test_title_bar_while_loading() {
        let mut title_bar = TitleBar::new(0, true, "Loading characters...".to_string());
        let text = rendered(&mut title_bar);
        assert!(text.contains("loading..."));
        assert!(!text.contains("0 characters"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(3, false, String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Holonet | 3 characters"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
