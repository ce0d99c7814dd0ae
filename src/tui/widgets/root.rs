//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen, ToastKind};
use crate::i18n::Key;
use crate::storage::KeyValueStore;
use crate::store::Store;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{alignment, favorites, header, help, nav, palettes, panel, picker};

/// Main layout structure:
/// ┌────────────────────────────────────────────┐
/// │ Title                          AR   Theme  │
/// ├────────────────────────────────────────────┤
/// │            Main Content                    │
/// │     (Picker / Favorites / Themes / Help)   │
/// ├────────────────────────────────────────────┤
/// │  [Pick Color]   Favorites   Themes         │
/// └────────────────────────────────────────────┘
///   status / toast
pub fn render<K: KeyValueStore>(frame: &mut Frame, store: &Store<K>, state: &AppState) {
    let theme = get_theme(store.document());
    let icons = &theme.icons;
    let root = frame.area();

    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.palette.bg_primary)
                .fg(theme.palette.fg_primary),
        ),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Bottom navigation
            Constraint::Length(1), // Status / toast
        ])
        .split(root);

    header::render(frame, store, &theme, rows[0]);

    let title = match state.screen {
        Screen::Picker => format!(" {} {} ", icons.picker, store.translate(Key::PickColor)),
        Screen::Favorites => format!(" {} {} ", icons.favorites, store.translate(Key::Favorites)),
        Screen::Themes => format!(" {} {} ", icons.themes, store.translate(Key::ThemeGallery)),
        Screen::Help => format!(" {} {} ", icons.help, store.translate(Key::Help)),
    };
    let main = panel(&theme, title, false).title_alignment(alignment(store.document()));
    let inner = main.inner(rows[1]);
    frame.render_widget(main, rows[1]);

    match state.screen {
        Screen::Picker => picker::render(frame, store, state, &theme, inner),
        Screen::Favorites => favorites::render(frame, store, state, &theme, inner),
        Screen::Themes => palettes::render(frame, store, state, &theme, inner),
        Screen::Help => help::render(frame, &theme, inner),
    }

    nav::render(frame, store, state, &theme, rows[2]);

    // Toast takes over the status line while it is live.
    let status = match &state.toast {
        Some(toast) => {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.palette.success),
                ToastKind::Error => (icons.error, theme.palette.error),
            };
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(
                    toast.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            format!(" {}", state.status),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };
    frame.render_widget(
        Paragraph::new(status).alignment(alignment(store.document())),
        rows[3],
    );
}
