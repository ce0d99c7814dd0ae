//! Color math: parsing CSS-style color strings and rendering them back as
//! hex, rgb(a) and hsl(a) text.
//!
//! Channels are kept as floats and only rounded on output, so a color parsed
//! from `hsl(...)` round-trips through `to_hsl_string` without drifting.

mod names;
mod parse;

pub use parse::ColorParseError;

use std::fmt;

/// An sRGB color with alpha.
///
/// `r`, `g` and `b` are in `0.0..=255.0`, `a` is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

/// Hue in degrees, saturation and lightness in percent, alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp(r, 0.0, 255.0),
            g: clamp(g, 0.0, 255.0),
            b: clamp(b, 0.0, 255.0),
            a: clamp(a, 0.0, 1.0),
        }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(f64::from(r), f64::from(g), f64::from(b), 1.0)
    }

    /// Parse a hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` or named color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parse::parse(input)
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Alpha scaled to the 0..=255 range used by the opacity slider.
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round() as u8
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: clamp(alpha, 0.0, 1.0),
            ..self
        }
    }

    /// Rounded channels, the values every text rendering is based on.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Lowercase `#rrggbb`, with an `aa` suffix when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.rounded();
        let mut bytes = vec![r as u8, g as u8, b as u8];
        if a < 1.0 {
            bytes.push((a * 255.0).round() as u8);
        }
        format!("#{}", hex::encode(bytes))
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when not fully opaque.
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b, a) = self.rounded();
        if a < 1.0 {
            format!("rgba({r}, {g}, {b}, {a})")
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when not fully opaque.
    pub fn to_hsl_string(&self) -> String {
        let hsla = self.to_hsl();
        // `+ 0.0` folds a negative zero so it never prints as "-0".
        let (h, s, l) = (
            hsla.h.round() + 0.0,
            hsla.s.round() + 0.0,
            hsla.l.round() + 0.0,
        );
        let a = round_to(hsla.a, 3);
        if a < 1.0 {
            format!("hsla({h}, {s}%, {l}%, {a})")
        } else {
            format!("hsl({h}, {s}%, {l}%)")
        }
    }

    pub fn to_hsl(&self) -> Hsla {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsla {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
                a: self.a,
            };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let h = 60.0 * if sector < 0.0 { sector + 6.0 } else { sector };

        Hsla {
            h,
            s: s * 100.0,
            l: l * 100.0,
            a: self.a,
        }
    }

    pub fn from_hsl(hsla: Hsla) -> Self {
        let h = hsla.h.rem_euclid(360.0);
        let s = clamp(hsla.s, 0.0, 100.0) / 100.0;
        let l = clamp(hsla.l, 0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::rgba((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0, hsla.a)
    }

    /// Composite over an opaque background.
    pub fn over(&self, background: Color) -> Color {
        let mix = |fg: f64, bg: f64| fg * self.a + bg * (1.0 - self.a);
        Color::rgba(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
            1.0,
        )
    }

    /// Relative luminance, used to pick readable text over a swatch.
    pub fn is_light(&self) -> bool {
        let [r, g, b, _] = self.to_rgba8();
        let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
        luma > 150.0
    }

    fn rounded(&self) -> (f64, f64, f64, f64) {
        (
            self.r.round(),
            self.g.round(),
            self.b.round(),
            round_to(self.a, 3),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The four textual representations shown in the format list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub rgba: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Hex,
    Rgb,
    Hsl,
    Rgba,
}

impl FormatKind {
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Hex,
        FormatKind::Rgb,
        FormatKind::Hsl,
        FormatKind::Rgba,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Hex => "HEX",
            FormatKind::Rgb => "RGB",
            FormatKind::Hsl => "HSL",
            FormatKind::Rgba => "RGBA",
        }
    }
}

impl Formats {
    /// Derive every format from a color string; `None` if it does not parse.
    pub fn of(input: &str) -> Option<Self> {
        Color::parse(input).ok().map(|c| Self::from_color(&c))
    }

    pub fn from_color(color: &Color) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
            hsl: color.to_hsl_string(),
            // Same string as RGB; it only gains the alpha channel below 1.
            rgba: color.to_rgb_string(),
        }
    }

    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Hex => &self.hex,
            FormatKind::Rgb => &self.rgb,
            FormatKind::Hsl => &self.hsl,
            FormatKind::Rgba => &self.rgba,
        }
    }
}

pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

pub(crate) fn round_to(v: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (v * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_expansion() {
        assert_eq!(Color::parse("#f00").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("#F00").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("#3B82F6").unwrap().to_hex(), "#3b82f6");
    }

    #[test]
    fn test_hex_with_alpha() {
        let c = Color::parse("#3B82F680").unwrap();
        assert_eq!(c.alpha(), 0.5);
        assert_eq!(c.to_hex(), "#3b82f680");
        assert_eq!(c.to_rgb_string(), "rgba(59, 130, 246, 0.5)");
        assert_eq!(c.alpha_byte(), 128);

        let short = Color::parse("#f008").unwrap();
        assert_eq!(short.alpha(), 0.53);
        assert_eq!(short.to_hex(), "#ff000087");
    }

    #[test]
    fn test_default_blue_formats() {
        let f = Formats::of("#3B82F6").unwrap();
        assert_eq!(f.hex, "#3b82f6");
        assert_eq!(f.rgb, "rgb(59, 130, 246)");
        assert_eq!(f.hsl, "hsl(217, 91%, 60%)");
        assert_eq!(f.rgba, "rgb(59, 130, 246)");
    }

    #[test]
    fn test_rgba_row_gains_alpha_only_when_translucent() {
        let f = Formats::of("#3B82F680").unwrap();
        assert_eq!(f.rgba, "rgba(59, 130, 246, 0.5)");
        assert_eq!(f.rgba, f.rgb);
    }

    #[test]
    fn test_rgb_functions() {
        let c = Color::parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(c.to_hex(), "#ff0000");

        let c = Color::parse("rgba(0, 0, 255, 0.25)").unwrap();
        assert_eq!(c.to_rgb_string(), "rgba(0, 0, 255, 0.25)");
        assert_eq!(c.to_hex(), "#0000ff40");

        let c = Color::parse("rgb(100% 0% 0% / 50%)").unwrap();
        assert_eq!(c.to_rgb_string(), "rgba(255, 0, 0, 0.5)");

        // Out-of-range channels are clamped.
        let c = Color::parse("rgb(300, -5, 10)").unwrap();
        assert_eq!(c.to_rgb_string(), "rgb(255, 0, 10)");
    }

    #[test]
    fn test_hsl_functions() {
        let c = Color::parse("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(c.to_hex(), "#ff0000");

        let c = Color::parse("hsla(120deg, 100%, 25%, 0.5)").unwrap();
        assert_eq!(c.to_rgb_string(), "rgba(0, 128, 0, 0.5)");
        assert_eq!(c.to_hsl_string(), "hsla(120, 100%, 25%, 0.5)");

        let c = Color::parse("hsl(240 100% 50% / 0.2)").unwrap();
        assert_eq!(c.to_hex(), "#0000ff33");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::parse("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("RebeccaPurple").unwrap().to_hex(), "#663399");
        assert_eq!(Color::parse("transparent").unwrap().to_hex(), "#00000000");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(!Color::is_valid(""));
        assert!(!Color::is_valid("#12"));
        assert!(!Color::is_valid("#12345"));
        assert!(!Color::is_valid("#ggg"));
        assert!(!Color::is_valid("3B82F6"));
        assert!(!Color::is_valid("rgb(1, 2)"));
        assert!(!Color::is_valid("hsl(10, 20, 30)"));
        assert!(!Color::is_valid("notacolor"));
    }

    #[test]
    fn test_with_alpha_and_grey_hsl() {
        let c = Color::parse("#808080").unwrap();
        assert_eq!(c.to_hsl_string(), "hsl(0, 0%, 50%)");
        let faded = c.with_alpha(0.0);
        assert_eq!(faded.to_hex(), "#80808000");
        assert_eq!(c.with_alpha(2.0).alpha(), 1.0);
    }

    #[test]
    fn test_hsl_roundtrip_is_stable() {
        for input in ["#3b82f6", "#e91e63", "#2d6a4f", "#ffce7c"] {
            let c = Color::parse(input).unwrap();
            let back = Color::from_hsl(c.to_hsl());
            assert_eq!(back.to_hex(), input);
        }
    }

    #[test]
    fn test_over_white() {
        let c = Color::parse("#00000080").unwrap();
        let flat = c.over(Color::rgb(255, 255, 255));
        assert_eq!(flat.to_hex(), "#808080");
    }
}
