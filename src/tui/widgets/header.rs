use crate::i18n::{Key, Language};
use crate::storage::KeyValueStore;
use crate::store::{Store, Theme as UiTheme};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;

/// Title on the reading-start side, language and theme toggles on the other.
pub fn render<K: KeyValueStore>(frame: &mut Frame, store: &Store<K>, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let block = panel(theme, String::new(), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", icons.picker), Style::default().fg(theme.palette.accent)),
        Span::styled(
            store.translate(Key::AppTitle),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    // The button names the language you would switch to.
    let lang_label = match store.language() {
        Language::En => "AR",
        Language::Ar => "EN",
    };
    let (theme_icon, theme_label) = match store.theme() {
        UiTheme::Light => (icons.dark, store.translate(Key::DarkMode)),
        UiTheme::Dark => (icons.light, store.translate(Key::LightMode)),
    };
    let key_style = Style::default().fg(theme.palette.fg_secondary);
    let button_style = Style::default()
        .fg(theme.palette.accent)
        .add_modifier(Modifier::BOLD);
    let toggles = Line::from(vec![
        Span::styled("L ", key_style),
        Span::styled(format!("{} {lang_label}", icons.language), button_style),
        Span::raw("   "),
        Span::styled("T ", key_style),
        Span::styled(format!("{theme_icon} {theme_label} "), button_style),
    ]);

    let (start, end) = if store.is_rtl() {
        (cols[1], cols[0])
    } else {
        (cols[0], cols[1])
    };
    let (start_align, end_align) = if store.is_rtl() {
        (Alignment::Right, Alignment::Left)
    } else {
        (Alignment::Left, Alignment::Right)
    };
    frame.render_widget(Paragraph::new(title).alignment(start_align), start);
    frame.render_widget(Paragraph::new(toggles).alignment(end_align), end);
}
