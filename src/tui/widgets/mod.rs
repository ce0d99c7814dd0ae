pub mod favorites;
pub mod header;
pub mod help;
pub mod nav;
pub mod palettes;
pub mod picker;
pub mod root;

use crate::i18n::TextDirection;
use crate::store::Document;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders},
};

/// Text alignment for the document's reading direction.
pub fn alignment(document: &Document) -> Alignment {
    match document.dir() {
        TextDirection::Ltr => Alignment::Left,
        TextDirection::Rtl => Alignment::Right,
    }
}

/// Terminal color for a CSS color string, flattened over `backdrop`.
/// Unparseable strings render as the backdrop.
pub fn paint(color: &str, backdrop: Color) -> Color {
    let Ok(c) = crate::color::Color::parse(color) else {
        return backdrop;
    };
    let base = match backdrop {
        Color::Rgb(r, g, b) => crate::color::Color::rgb(r, g, b),
        _ => crate::color::Color::rgb(255, 255, 255),
    };
    let [r, g, b, _] = c.over(base).to_rgba8();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on `color`.
pub fn ink_on(color: &str, backdrop: Color) -> Color {
    let Color::Rgb(r, g, b) = paint(color, backdrop) else {
        return Color::Black;
    };
    if crate::color::Color::rgb(r, g, b).is_light() {
        Color::Black
    } else {
        Color::White
    }
}

pub(crate) fn panel(theme: &Theme, title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppState, Screen};
    use crate::storage::Storage;
    use crate::store::Store;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(store: &Store<Storage>, state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| root::render(f, store, state))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_paint_flattens_alpha() {
        assert_eq!(paint("#00000080", Color::Rgb(255, 255, 255)), Color::Rgb(128, 128, 128));
        assert_eq!(paint("nope", Color::Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(ink_on("#ffffff", Color::Black), Color::Black);
        assert_eq!(ink_on("#000000", Color::Black), Color::White);
    }

    #[test]
    fn test_every_screen_renders() {
        let mut store = Store::open(Storage::open_in_memory().unwrap());
        store.add_favorite("#FF0000").unwrap();
        let mut state = AppState::new(store.current_color());
        for screen in [Screen::Picker, Screen::Favorites, Screen::Themes, Screen::Help] {
            state.screen = screen;
            let out = text(&render(&store, &state));
            assert!(out.contains("ColorPicker Pro"), "{screen:?}");
        }
    }

    #[test]
    fn test_picker_shows_formats() {
        let store = Store::open(Storage::open_in_memory().unwrap());
        let state = AppState::new(store.current_color());
        let out = text(&render(&store, &state));
        assert!(out.contains("rgb(59, 130, 246)"));
        assert!(out.contains("hsl(217, 91%, 60%)"));
    }

    #[test]
    fn test_empty_favorites_message() {
        let store = Store::open(Storage::open_in_memory().unwrap());
        let mut state = AppState::new(store.current_color());
        state.screen = Screen::Favorites;
        let out = text(&render(&store, &state));
        assert!(out.contains("No favorite colors yet"));
    }

    #[test]
    fn test_header_language_label() {
        let mut store = Store::open(Storage::open_in_memory().unwrap());
        let state = AppState::new(store.current_color());
        assert!(text(&render(&store, &state)).contains("AR"));
        store.set_language(crate::i18n::Language::Ar).unwrap();
        assert!(text(&render(&store, &state)).contains("EN"));
    }

    #[test]
    fn test_gallery_lists_palettes() {
        let store = Store::open(Storage::open_in_memory().unwrap());
        let mut state = AppState::new(store.current_color());
        state.screen = Screen::Themes;
        let out = text(&render(&store, &state));
        assert!(out.contains("Material Design"));
        assert!(out.contains("Monochrome"));
    }
}
