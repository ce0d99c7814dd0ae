use crate::app::state::{AppState, Screen};
use crate::i18n::Key;
use crate::storage::KeyValueStore;
use crate::store::Store;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;

/// Tab definition with icon and label
struct NavItem {
    screen: Screen,
    icon: &'static str,
    label: Key,
}

/// Bottom navigation bar. Tabs read right to left in Arabic.
pub fn render<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let block = panel(theme, String::new(), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut items = vec![
        NavItem { screen: Screen::Picker, icon: icons.picker, label: Key::PickColor },
        NavItem { screen: Screen::Favorites, icon: icons.favorites, label: Key::Favorites },
        NavItem { screen: Screen::Themes, icon: icons.themes, label: Key::Themes },
    ];
    if store.is_rtl() {
        items.reverse();
    }

    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        let is_selected = state.screen == item.screen;
        let style = if is_selected {
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        spans.push(Span::styled(
            format!(" {} {} ", item.icon, store.translate(item.label)),
            style,
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}
