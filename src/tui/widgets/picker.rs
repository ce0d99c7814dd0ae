//! Picker screen: live preview, hex input, picker panel, opacity, formats

use crate::app::state::{AppState, CopyTarget, PickerFocus};
use crate::color::{Color as Rgba, FormatKind};
use crate::i18n::Key;
use crate::storage::KeyValueStore;
use crate::store::Store;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{alignment, ink_on, paint, panel};

const PHONE_WIDTH: u16 = 30;

pub fn render<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PHONE_WIDTH + 2), Constraint::Min(30)])
        .split(area);
    // Preview sits on the reading-start side.
    let (preview_area, controls_area) = if store.is_rtl() {
        (cols[1], cols[0])
    } else {
        (cols[0], cols[1])
    };

    render_preview(frame, store, theme, preview_area);

    let panel_height = if state.picker.show_panel { 5 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Hex input
            Constraint::Length(panel_height), // Picker panel
            Constraint::Length(3),            // Opacity
            Constraint::Length(1),            // Save / Share
            Constraint::Length(6),            // Formats
            Constraint::Min(0),
        ])
        .split(controls_area);

    render_hex_input(frame, store, state, theme, rows[0]);
    if state.picker.show_panel {
        render_panel(frame, store, state, theme, rows[1]);
    }
    render_opacity(frame, store, state, theme, rows[2]);
    render_actions(frame, store, state, theme, rows[3]);
    render_formats(frame, store, state, theme, rows[4]);
}

/// Phone-shaped mock app painted with the current color.
fn render_preview<K: KeyValueStore>(frame: &mut Frame, store: &Store<K>, theme: &Theme, area: Rect) {
    let block = panel(theme, format!(" {} ", store.translate(Key::Preview)), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let screen_bg = theme.palette.bg_secondary;
    let color = paint(store.current_color(), screen_bg);
    let ink = ink_on(store.current_color(), screen_bg);
    let placeholder = theme.palette.bg_highlight;
    let width = inner.width.saturating_sub(2) as usize;

    let bar = |text: &str, fg: Color, bg: Color| {
        Line::from(Span::styled(format!("{text:<width$}"), Style::default().fg(fg).bg(bg)))
    };
    let stub = |len: usize| {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(" ".repeat(len.min(width)), Style::default().bg(placeholder)),
        ])
    };

    let mut lines = vec![
        bar(" 9:41", ink, color),
        bar(" ≡  App", ink, color),
        Line::default(),
        stub(width * 3 / 4),
        Line::default(),
        stub(width / 2),
        Line::default(),
        stub(width * 2 / 3),
        Line::default(),
    ];
    // Round action button, pinned to the trailing edge.
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(width.saturating_sub(4))),
        Span::styled("(+)", Style::default().fg(ink).bg(color).add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::default());
    lines.push(bar(&format!("{:^width$}", "OK"), ink, color));

    let phone = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().style(Style::default().bg(screen_bg))),
        phone,
    );
}

fn render_hex_input<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let focused = state.picker.focus == PickerFocus::HexInput;
    let block = panel(theme, format!(" {} ", store.translate(Key::HexInput)), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let swatch = paint(store.current_color(), theme.palette.bg_primary);
    let cursor = if focused { "▏" } else { "" };
    let valid = Rgba::is_valid(&state.picker.hex_input);
    let input_style = if valid {
        Style::default().fg(theme.palette.fg_primary)
    } else {
        Style::default().fg(theme.palette.error)
    };

    let line = Line::from(vec![
        Span::styled(icons.swatch, Style::default().fg(swatch)),
        Span::raw(" "),
        Span::styled(state.picker.hex_input.clone(), input_style),
        Span::styled(cursor, Style::default().fg(theme.palette.accent)),
        Span::raw("  "),
        copy_badge(store, state, theme, &CopyTarget::HexInput),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(alignment(store.document())), inner);
}

/// Hue, saturation and lightness of the opaque color.
fn render_panel<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let focused = state.picker.focus.is_panel();
    let block = panel(theme, format!(" {} ", store.translate(Key::PickerPanel)), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hsl = Rgba::parse(store.current_color())
        .map(|c| c.with_alpha(1.0).to_hsl())
        .ok();
    let (h, s, l) = hsl.map(|v| (v.h, v.s, v.l)).unwrap_or_default();
    let width = inner.width.saturating_sub(14) as usize;

    let rows = [
        (PickerFocus::Hue, "H", format!("{:>3.0}°", h), h / 360.0),
        (PickerFocus::Saturation, "S", format!("{:>3.0}%", s), s / 100.0),
        (PickerFocus::Lightness, "L", format!("{:>3.0}%", l), l / 100.0),
    ];
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(focus, label, value, ratio)| {
            slider_row(theme, state.picker.focus == focus, label, value, ratio, width)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_opacity<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let focused = state.picker.focus == PickerFocus::Opacity;
    let block = panel(theme, format!(" {} ", store.translate(Key::Opacity)), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let alpha = state.picker.alpha;
    let percent = (f64::from(alpha) / 255.0 * 100.0).round();
    let width = inner.width.saturating_sub(14) as usize;
    let line = slider_row(
        theme,
        focused,
        "A",
        format!("{percent:>3.0}%"),
        f64::from(alpha) / 255.0,
        width,
    );
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_actions<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let key_style = Style::default().fg(theme.palette.fg_secondary);
    let button = Style::default()
        .fg(theme.palette.bg_primary)
        .bg(theme.palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" s ", key_style),
        Span::styled(format!(" {} {} ", icons.save, store.translate(Key::Save)), button),
        Span::raw("   "),
        Span::styled("S ", key_style),
        Span::styled(format!(" {} {} ", icons.share, store.translate(Key::Share)), button),
    ];
    if state.share_in_flight {
        spans.push(Span::styled(" …", key_style));
    } else if state.is_copied(&CopyTarget::Share) {
        spans.push(Span::styled(
            format!(" {}", icons.success),
            Style::default().fg(theme.palette.success),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(alignment(store.document())),
        area,
    );
}

fn render_formats<K: KeyValueStore>(
    frame: &mut Frame,
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) {
    let icons = &theme.icons;
    let focused = matches!(state.picker.focus, PickerFocus::Format(_));
    let block = panel(theme, format!(" {} ", store.translate(Key::ColorDetails)), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(formats) = store.formats() else {
        return;
    };

    let lines: Vec<Line> = FormatKind::ALL
        .into_iter()
        .map(|kind| {
            let is_selected = state.picker.focus == PickerFocus::Format(kind);
            let value_style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let prefix = if is_selected { icons.selected } else { icons.unselected };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.palette.accent)),
                Span::raw(" "),
                Span::styled(
                    format!("{:<5}", kind.label()),
                    Style::default().fg(theme.palette.fg_secondary),
                ),
                Span::styled(format!("{:<28}", formats.get(kind)), value_style),
                copy_badge(store, state, theme, &CopyTarget::Format(kind)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Copy icon, or a check mark with "Copied!" while the flag is live.
fn copy_badge<K: KeyValueStore>(
    store: &Store<K>,
    state: &AppState,
    theme: &Theme,
    target: &CopyTarget,
) -> Span<'static> {
    if state.is_copied(target) {
        Span::styled(
            format!("{} {}", theme.icons.success, store.translate(Key::Copied)),
            Style::default().fg(theme.palette.success),
        )
    } else {
        Span::styled(theme.icons.copy, Style::default().fg(theme.palette.fg_secondary))
    }
}

fn slider_row(
    theme: &Theme,
    focused: bool,
    label: &'static str,
    value: String,
    ratio: f64,
    width: usize,
) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };
    let prefix = if focused { theme.icons.selected } else { theme.icons.unselected };
    Line::from(vec![
        Span::styled(prefix, Style::default().fg(theme.palette.accent)),
        Span::styled(format!(" {label} "), Style::default().fg(theme.palette.fg_secondary)),
        Span::styled(format!("{value} "), style),
        Span::styled(slider(width, ratio, &theme.icons), style),
    ])
}

fn slider(width: usize, ratio: f64, icons: &Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let filled = ((width - 1) as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push_str(icons.slider_full);
    }
    bar.push_str(icons.slider_head);
    for _ in 0..empty {
        bar.push_str(icons.slider_empty);
    }
    bar
}
