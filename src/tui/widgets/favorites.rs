use crate::app::state::{AppState, CopyTarget};
use crate::i18n::Key;
use crate::storage::KeyValueStore;
use crate::store::Store;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{alignment, paint};

pub fn render<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let favorites = store.favorites();

    if favorites.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(icons.favorites, Style::default().fg(theme.palette.fg_secondary))),
            Line::from(Span::styled(
                store.translate(Key::NoFavorites),
                Style::default().fg(theme.palette.fg_secondary),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = favorites
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let is_selected = i == state.favorites.selected;
            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let mut spans = vec![
                Span::styled(
                    format!("{}{}", icons.swatch, icons.swatch),
                    Style::default().fg(paint(color, theme.palette.bg_primary)),
                ),
                Span::raw("  "),
                Span::styled(color.clone(), style),
            ];
            if state.is_copied(&CopyTarget::Favorite(color.clone())) {
                spans.push(Span::styled(
                    format!("  {} {}", icons.success, store.translate(Key::Copied)),
                    Style::default().fg(theme.palette.success),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.favorites.selected.min(favorites.len() - 1)));

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.palette.bg_highlight))
        .highlight_symbol(icons.list_cursor);
    frame.render_stateful_widget(list, layout[0], &mut list_state);

    let hint = format!(
        "{} · c {} · d {}",
        store.translate(Key::TapToLoad),
        icons.copy,
        icons.error
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(theme.palette.fg_secondary))))
            .alignment(alignment(store.document())),
        layout[1],
    );
}
