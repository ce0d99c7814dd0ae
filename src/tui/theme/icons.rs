//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    // Navigation
    pub picker: &'static str,
    pub favorites: &'static str,
    pub themes: &'static str,
    pub help: &'static str,

    // Header toggles
    pub language: &'static str,
    pub light: &'static str,
    pub dark: &'static str,

    // Actions
    pub copy: &'static str,
    pub share: &'static str,
    pub save: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
    pub list_cursor: &'static str,

    // Swatches and sliders
    pub swatch: &'static str,
    pub slider_full: &'static str,
    pub slider_empty: &'static str,
    pub slider_head: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            picker: "\u{f1fb}",         // nf-fa-eyedropper
            favorites: "\u{f004}",      // nf-fa-heart
            themes: "\u{f53f}",         // nf-fa-palette
            help: "\u{f059}",           // nf-fa-question_circle

            language: "\u{f0ac}",       // nf-fa-globe
            light: "\u{f185}",          // nf-fa-sun_o
            dark: "\u{f186}",           // nf-fa-moon_o

            copy: "\u{f0c5}",           // nf-fa-copy
            share: "\u{f064}",          // nf-fa-share
            save: "\u{f08a}",           // nf-fa-heart_o

            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times

            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",
            list_cursor: "\u{f054} ",

            swatch: "██",
            slider_full: "━",
            slider_empty: "─",
            slider_head: "●",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
