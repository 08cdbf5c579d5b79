use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CharacterDetails, CharacterList, FavoritesPanel, TabBar, TitleBar};
use crate::tui::{Tab, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0)]);
    let [title_area, tabs_area, main_area] = layout.areas(frame.area());

    TitleBar::new(
        app.roster.characters.len(),
        app.roster.is_loading,
        app.status_message.clone(),
    )
    .render(frame, title_area);

    TabBar {
        active: tui.tab,
        favorites_total: app.favorites.state().total(),
    }
    .render(frame, tabs_area);

    match tui.tab {
        Tab::Characters => {
            tui.character_list.sync_len(app.roster.characters.len());
            CharacterList::new(&mut tui.character_list, &app.roster).render(frame, main_area);
        }
        Tab::Favorites => {
            FavoritesPanel::new(app.favorites.state()).render(frame, main_area);
        }
    }

    if let Some(character) = tui.details.and_then(|index| app.character(index)) {
        CharacterDetails::new(character).render(frame, main_area);
    }
}
