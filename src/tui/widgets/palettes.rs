//! Palette gallery: curated five-color palettes, one per row

use crate::app::state::AppState;
use crate::i18n::Key;
use crate::palettes::PALETTES;
use crate::storage::KeyValueStore;
use crate::store::Store;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{alignment, ink_on, paint};

pub fn render<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let bg = theme.palette.bg_primary;

    let items: Vec<ListItem> = PALETTES
        .iter()
        .enumerate()
        .map(|(i, palette)| {
            let is_selected = i == state.palettes.palette;
            let name_style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let mut spans = vec![Span::styled(format!("{:<18}", palette.name), name_style)];
            for (j, color) in palette.colors.iter().enumerate() {
                let cursor = is_selected && j == state.palettes.swatch;
                let label = if cursor { " ◆ " } else { "   " };
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .bg(paint(color, bg))
                        .fg(ink_on(color, bg))
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            if is_selected
                && let Some(color) = palette.colors.get(state.palettes.swatch)
            {
                spans.push(Span::styled(
                    format!(" {color}"),
                    Style::default().fg(theme.palette.fg_secondary),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.palettes.palette));

    let list = List::new(items).highlight_symbol(icons.list_cursor);
    frame.render_stateful_widget(list, layout[0], &mut list_state);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            store.translate(Key::TapToLoad),
            Style::default().fg(theme.palette.fg_secondary),
        )))
        .alignment(alignment(store.document())),
        layout[1],
    );
}
