//! Theme configuration - light and dark, following the document's `dark` class

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Palette;

use crate::store::Document;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self {
            palette: if dark { Palette::DARK } else { Palette::LIGHT },
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

/// Theme for the document as it currently stands.
pub fn get_theme(document: &Document) -> Theme {
    Theme::new(document.is_dark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::store::Store;

    #[test]
    fn test_theme_follows_dark_class() {
        let mut store = Store::open(Storage::open_in_memory().unwrap());
        assert_eq!(get_theme(store.document()).palette.bg_primary, Palette::LIGHT.bg_primary);
        store.toggle_theme().unwrap();
        assert_eq!(get_theme(store.document()).palette.bg_primary, Palette::DARK.bg_primary);
    }
}
