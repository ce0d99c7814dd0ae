//! Help screen showing keybindings

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the help screen
pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    // Split into columns
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_content = vec![
        section_header("Navigation", theme),
        keybind("Tab / S-Tab", "Next / previous screen", theme),
        keybind("1-3", "Pick Color / Favorites / Themes", theme),
        keybind("? / F1", "This screen", theme),
        keybind("j / Down", "Move down", theme),
        keybind("k / Up", "Move up", theme),
        Line::default(),
        section_header("Picker", theme),
        keybind("/ or i", "Edit the color", theme),
        keybind("Ctrl+u", "Clear input", theme),
        keybind("Enter / Esc", "Leave the input", theme),
        keybind("p", "Open / close picker panel", theme),
        keybind("h / l", "Nudge focused row", theme),
        keybind("[ / ]", "Nudge by 10", theme),
        keybind("Enter / c", "Copy focused format", theme),
    ];
    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);

    let right_content = vec![
        section_header("Colors", theme),
        keybind("s", "Save to favorites", theme),
        keybind("S", "Share", theme),
        keybind("r", "Random color", theme),
        Line::default(),
        section_header("Favorites / Themes", theme),
        keybind("Enter", "Load color", theme),
        keybind("c", "Copy color", theme),
        keybind("d / Del", "Remove favorite", theme),
        keybind("h / l", "Choose swatch", theme),
        Line::default(),
        section_header("General", theme),
        keybind("L", "Switch language", theme),
        keybind("T", "Switch light / dark", theme),
        keybind("q / Esc", "Quit", theme),
    ];
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
