use crate::color::{Color, FormatKind, Hsla};
use crate::palettes::{PALETTES, SWATCHES_PER_PALETTE};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Picker,
    Favorites,
    Themes,
    Help,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Picker => Screen::Favorites,
            Screen::Favorites => Screen::Themes,
            Screen::Themes => Screen::Picker,
            Screen::Help => Screen::Picker,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Picker => Screen::Themes,
            Screen::Favorites => Screen::Picker,
            Screen::Themes => Screen::Favorites,
            Screen::Help => Screen::Themes,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Picker => "picker",
            Screen::Favorites => "favorites",
            Screen::Themes => "themes",
            Screen::Help => "help",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "picker" => Some(Screen::Picker),
            "favorites" => Some(Screen::Favorites),
            "themes" => Some(Screen::Themes),
            "help" => Some(Screen::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > Duration::from_secs(3)
    }
}

/// What a "copied" check mark is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    HexInput,
    Format(FormatKind),
    Favorite(String),
    Share,
}

#[derive(Debug, Clone)]
pub struct CopiedFlag {
    pub target: CopyTarget,
    pub at: Instant,
}

impl CopiedFlag {
    pub fn new(target: CopyTarget) -> Self {
        Self {
            target,
            at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.at.elapsed() >= ttl
    }
}

/// Focusable rows of the picker screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFocus {
    HexInput,
    Hue,
    Saturation,
    Lightness,
    Opacity,
    Format(FormatKind),
}

impl PickerFocus {
    fn order(panel_open: bool) -> Vec<PickerFocus> {
        let mut rows = vec![PickerFocus::HexInput];
        if panel_open {
            rows.extend([
                PickerFocus::Hue,
                PickerFocus::Saturation,
                PickerFocus::Lightness,
            ]);
        }
        rows.push(PickerFocus::Opacity);
        rows.extend(FormatKind::ALL.map(PickerFocus::Format));
        rows
    }

    pub fn is_panel(self) -> bool {
        matches!(
            self,
            PickerFocus::Hue | PickerFocus::Saturation | PickerFocus::Lightness
        )
    }
}

/// Transient picker-screen state. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub hex_input: String,
    /// Opacity slider, 0..=255.
    pub alpha: u8,
    pub show_panel: bool,
    pub focus: PickerFocus,
}

impl PickerState {
    pub fn new(current: &str) -> Self {
        let alpha = Color::parse(current).map(|c| c.alpha_byte()).unwrap_or(255);
        Self {
            hex_input: current.to_string(),
            alpha,
            show_panel: false,
            focus: PickerFocus::Opacity,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.focus == PickerFocus::HexInput
    }

    pub fn focus_next(&mut self) {
        let order = PickerFocus::order(self.show_panel);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1).min(order.len() - 1)];
    }

    pub fn focus_prev(&mut self) {
        let order = PickerFocus::order(self.show_panel);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[idx.saturating_sub(1)];
    }

    pub fn toggle_panel(&mut self) {
        self.show_panel = !self.show_panel;
        if !self.show_panel && self.focus.is_panel() {
            self.focus = PickerFocus::Opacity;
        }
    }

    /// Bring the input buffer and slider in line with a current color that
    /// changed from elsewhere (palette, favorite, random, panel).
    ///
    /// The slider only moves if it is off by more than one step, and the
    /// buffer is only replaced if it no longer denotes the same color, so a
    /// short form like `#f00` the user just typed survives.
    pub fn sync_with(&mut self, current: &str) {
        let Ok(color) = Color::parse(current) else {
            return;
        };
        let alpha = color.alpha_byte();
        if alpha.abs_diff(self.alpha) > 1 {
            self.alpha = alpha;
        }
        let same = Color::parse(&self.hex_input)
            .map(|typed| typed.to_hex() == color.to_hex())
            .unwrap_or(false);
        if !same {
            self.hex_input = current.to_string();
        }
    }

    /// Buffer edited: returns the color to store when the text parses.
    /// "What you type is what you get": the slider takes the typed alpha.
    pub fn commit_input(&mut self) -> Option<String> {
        let color = Color::parse(&self.hex_input).ok()?;
        self.alpha = color.alpha_byte();
        Some(color.to_hex())
    }

    /// Slider moved: the current color with the new alpha.
    pub fn set_alpha(&mut self, current: &str, alpha: u8) -> Option<String> {
        self.alpha = alpha;
        let color = Color::parse(current).ok()?;
        Some(color.with_alpha(f64::from(alpha) / 255.0).to_hex())
    }

    /// Picker panel moved: the opaque color nudged along the focused channel,
    /// then the slider alpha applied.
    pub fn nudge_panel(&self, current: &str, delta: i16) -> Option<String> {
        let opaque = Color::parse(current).ok()?.with_alpha(1.0);
        let mut hsl = opaque.to_hsl();
        let d = f64::from(delta);
        match self.focus {
            PickerFocus::Hue => hsl.h = (hsl.h.round() + d).rem_euclid(360.0),
            PickerFocus::Saturation => hsl.s = (hsl.s.round() + d).clamp(0.0, 100.0),
            PickerFocus::Lightness => hsl.l = (hsl.l.round() + d).clamp(0.0, 100.0),
            _ => return None,
        }
        Some(self.with_slider_alpha(Color::from_hsl(Hsla { a: 1.0, ..hsl })))
    }

    /// Apply the slider alpha to an opaque color coming from the panel or the
    /// random generator.
    pub fn with_slider_alpha(&self, opaque: Color) -> String {
        opaque.with_alpha(f64::from(self.alpha) / 255.0).to_hex()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub selected: usize,
}

impl FavoritesState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub palette: usize,
    pub swatch: usize,
}

impl PaletteState {
    pub fn select_prev(&mut self) {
        self.palette = self.palette.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.palette = (self.palette + 1).min(PALETTES.len() - 1);
    }

    pub fn move_swatch(&mut self, delta: i16) {
        let max = SWATCHES_PER_PALETTE as i64 - 1;
        self.swatch = (self.swatch as i64 + i64::from(delta)).clamp(0, max) as usize;
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub screen: Screen,

    pub picker: PickerState,
    pub favorites: FavoritesState,
    pub palettes: PaletteState,

    pub copied: Option<CopiedFlag>,
    pub share_in_flight: bool,

    // Toast notification
    pub toast: Option<Toast>,

    // Status line
    pub status: String,
}

impl AppState {
    pub fn new(current_color: &str) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Picker,
            picker: PickerState::new(current_color),
            favorites: FavoritesState::default(),
            palettes: PaletteState::default(),
            copied: None,
            share_in_flight: false,
            toast: None,
            status: String::new(),
        }
    }

    pub fn is_copied(&self, target: &CopyTarget) -> bool {
        self.copied.as_ref().is_some_and(|c| &c.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycle() {
        assert_eq!(Screen::Picker.next(), Screen::Favorites);
        assert_eq!(Screen::Picker.prev(), Screen::Themes);
        assert_eq!(Screen::Help.next(), Screen::Picker);
        for s in [Screen::Picker, Screen::Favorites, Screen::Themes, Screen::Help] {
            assert_eq!(Screen::from_name(s.name()), Some(s));
        }
        assert_eq!(Screen::from_name("settings"), None);
    }

    #[test]
    fn test_focus_skips_closed_panel() {
        let mut p = PickerState::new("#3B82F6");
        p.focus = PickerFocus::HexInput;
        p.focus_next();
        assert_eq!(p.focus, PickerFocus::Opacity);

        p.toggle_panel();
        p.focus_prev();
        assert_eq!(p.focus, PickerFocus::Lightness);

        // Closing the panel moves focus off its rows.
        p.toggle_panel();
        assert_eq!(p.focus, PickerFocus::Opacity);
    }

    #[test]
    fn test_focus_stops_at_ends() {
        let mut p = PickerState::new("#3B82F6");
        p.focus = PickerFocus::HexInput;
        p.focus_prev();
        assert_eq!(p.focus, PickerFocus::HexInput);
        p.focus = PickerFocus::Format(FormatKind::Rgba);
        p.focus_next();
        assert_eq!(p.focus, PickerFocus::Format(FormatKind::Rgba));
    }

    #[test]
    fn test_sync_keeps_equivalent_short_hex() {
        let mut p = PickerState::new("#3B82F6");
        p.hex_input = "#f00".to_string();
        p.sync_with("#ff0000");
        assert_eq!(p.hex_input, "#f00");

        p.sync_with("#00ff00");
        assert_eq!(p.hex_input, "#00ff00");
    }

    #[test]
    fn test_sync_alpha_tolerance() {
        let mut p = PickerState::new("#3B82F6");
        assert_eq!(p.alpha, 255);
        // 0xfe is within one step of the slider.
        p.sync_with("#3b82f6fe");
        assert_eq!(p.alpha, 255);
        p.sync_with("#3b82f680");
        assert_eq!(p.alpha, 128);
    }

    #[test]
    fn test_sync_ignores_unparseable_current() {
        let mut p = PickerState::new("#3B82F6");
        p.sync_with("garbage");
        assert_eq!(p.hex_input, "#3B82F6");
    }

    #[test]
    fn test_commit_input() {
        let mut p = PickerState::new("#3B82F6");
        p.alpha = 100;
        p.hex_input = "#ff0000".to_string();
        assert_eq!(p.commit_input().as_deref(), Some("#ff0000"));
        assert_eq!(p.alpha, 255);

        p.hex_input = "#ff00".to_string();
        assert_eq!(p.commit_input().as_deref(), Some("#ffff0000"));
        assert_eq!(p.alpha, 0);

        p.hex_input = "#ff0".to_string() + "z";
        assert_eq!(p.commit_input(), None);
        assert_eq!(p.alpha, 0);
    }

    #[test]
    fn test_set_alpha() {
        let mut p = PickerState::new("#3B82F6");
        assert_eq!(p.set_alpha("#3B82F6", 128).as_deref(), Some("#3b82f680"));
        assert_eq!(p.alpha, 128);
        assert_eq!(p.set_alpha("#3b82f680", 255).as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_nudge_panel_keeps_slider_alpha() {
        let mut p = PickerState::new("#ff0000");
        p.show_panel = true;
        p.focus = PickerFocus::Hue;
        p.alpha = 128;
        assert_eq!(p.nudge_panel("#ff0000", 120).as_deref(), Some("#00ff0080"));

        p.focus = PickerFocus::Lightness;
        assert_eq!(p.nudge_panel("#ff0000", 100).as_deref(), Some("#ffffff80"));

        p.focus = PickerFocus::Opacity;
        assert_eq!(p.nudge_panel("#ff0000", 1), None);
    }

    #[test]
    fn test_hue_wraps() {
        let mut p = PickerState::new("#ff0000");
        p.focus = PickerFocus::Hue;
        assert_eq!(p.nudge_panel("#ff0000", -120).as_deref(), Some("#0000ff"));
    }

    #[test]
    fn test_palette_selection_bounds() {
        let mut s = PaletteState::default();
        s.select_prev();
        assert_eq!(s.palette, 0);
        for _ in 0..20 {
            s.select_next();
        }
        assert_eq!(s.palette, PALETTES.len() - 1);
        s.move_swatch(-3);
        assert_eq!(s.swatch, 0);
        s.move_swatch(10);
        assert_eq!(s.swatch, 4);
    }

    #[test]
    fn test_favorites_selection_clamp() {
        let mut s = FavoritesState::default();
        s.select_next(0);
        assert_eq!(s.selected, 0);
        s.select_next(3);
        s.select_next(3);
        s.select_next(3);
        assert_eq!(s.selected, 2);
        s.clamp(1);
        assert_eq!(s.selected, 0);
    }
}
