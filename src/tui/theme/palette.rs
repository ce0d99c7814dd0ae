//! Color palettes for the light and dark UI themes

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        bg_primary: Color::Rgb(243, 244, 246),   // #f3f4f6 gray-100
        bg_secondary: Color::Rgb(255, 255, 255), // #ffffff
        bg_highlight: Color::Rgb(229, 231, 235), // #e5e7eb gray-200
        fg_primary: Color::Rgb(17, 24, 39),      // #111827 gray-900
        fg_secondary: Color::Rgb(107, 114, 128), // #6b7280 gray-500
        accent: Color::Rgb(59, 130, 246),        // #3b82f6 blue-500
        border: Color::Rgb(209, 213, 219),       // #d1d5db gray-300
        success: Color::Rgb(22, 163, 74),        // #16a34a
        error: Color::Rgb(220, 38, 38),          // #dc2626
    };

    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(17, 24, 39),      // #111827 gray-900
        bg_secondary: Color::Rgb(31, 41, 55),    // #1f2937 gray-800
        bg_highlight: Color::Rgb(55, 65, 81),    // #374151 gray-700
        fg_primary: Color::Rgb(243, 244, 246),   // #f3f4f6 gray-100
        fg_secondary: Color::Rgb(156, 163, 175), // #9ca3af gray-400
        accent: Color::Rgb(96, 165, 250),        // #60a5fa blue-400
        border: Color::Rgb(75, 85, 99),          // #4b5563 gray-600
        success: Color::Rgb(74, 222, 128),       // #4ade80
        error: Color::Rgb(248, 113, 113),        // #f87171
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
