use super::{Color, Hsla, clamp, names, round_to};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("invalid {func}() arguments '{args}'")]
    InvalidFunction { func: &'static str, args: String },
    #[error("unknown color '{0}'")]
    Unknown(String),
}

pub(super) fn parse(input: &str) -> Result<Color, ColorParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let lower = s.to_ascii_lowercase();

    if let Some(digits) = lower.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
    }
    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb(args).ok_or_else(|| ColorParseError::InvalidFunction {
            func: "rgb",
            args: args.to_string(),
        });
    }
    if let Some(args) = function_args(&lower, "hsla").or_else(|| function_args(&lower, "hsl")) {
        return parse_hsl(args).ok_or_else(|| ColorParseError::InvalidFunction {
            func: "hsl",
            args: args.to_string(),
        });
    }

    names::lookup(&lower).ok_or_else(|| ColorParseError::Unknown(s.to_string()))
}

/// Hex digits without the leading `#`: 3, 4, 6 or 8 of them.
fn parse_hex(digits: &str) -> Option<Color> {
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };
    let bytes = hex::decode(expanded).ok()?;
    let alpha = match bytes.get(3) {
        Some(a) => round_to(f64::from(*a) / 255.0, 2),
        None => 1.0,
    };
    Some(Color::rgba(
        f64::from(bytes[0]),
        f64::from(bytes[1]),
        f64::from(bytes[2]),
        alpha,
    ))
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split function arguments in either the legacy comma form `a, b, c, d` or
/// the space form `a b c / d`.
fn split_args(args: &str) -> Option<(Vec<&str>, Option<&str>)> {
    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        match parts.len() {
            3 => Some((parts, None)),
            4 => {
                let alpha = parts.pop();
                Some((parts, alpha))
            }
            _ => None,
        }
    } else {
        let (channels, alpha) = match args.split_once('/') {
            Some((c, a)) => (c, Some(a.trim())),
            None => (args, None),
        };
        let parts: Vec<&str> = channels.split_whitespace().collect();
        (parts.len() == 3).then_some((parts, alpha))
    }
}

fn number(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// A number with an optional `%`; percentages are scaled by `percent_scale`.
fn number_or_percent(s: &str, percent_scale: f64) -> Option<f64> {
    match s.trim().strip_suffix('%') {
        Some(p) => number(p).map(|v| v * percent_scale),
        None => number(s),
    }
}

fn parse_alpha(s: Option<&str>) -> Option<f64> {
    match s {
        Some(a) => number_or_percent(a, 0.01).map(|a| clamp(a, 0.0, 1.0)),
        None => Some(1.0),
    }
}

fn parse_rgb(args: &str) -> Option<Color> {
    let (channels, alpha) = split_args(args)?;
    let r = number_or_percent(channels[0], 2.55)?;
    let g = number_or_percent(channels[1], 2.55)?;
    let b = number_or_percent(channels[2], 2.55)?;
    let a = parse_alpha(alpha)?;
    Some(Color::rgba(r, g, b, a))
}

fn parse_hsl(args: &str) -> Option<Color> {
    let (channels, alpha) = split_args(args)?;
    let hue = channels[0].trim();
    let h = number(hue.strip_suffix("deg").unwrap_or(hue))?;
    // Saturation and lightness must carry a percent sign.
    let s = number(channels[1].trim().strip_suffix('%')?)?;
    let l = number(channels[2].trim().strip_suffix('%')?)?;
    let a = parse_alpha(alpha)?;
    Some(Color::from_hsl(Hsla { h, s, l, a }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(parse("   "), Err(ColorParseError::Empty));
        assert!(matches!(parse("#12345"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(
            parse("rgb(1, 2)"),
            Err(ColorParseError::InvalidFunction { func: "rgb", .. })
        ));
        assert!(matches!(parse("blurple"), Err(ColorParseError::Unknown(_))));
    }

    #[test]
    fn test_split_args() {
        let (c, a) = split_args("1, 2, 3").unwrap();
        assert_eq!(c, vec!["1", "2", "3"]);
        assert_eq!(a, None);

        let (c, a) = split_args("1 2 3 / 40%").unwrap();
        assert_eq!(c, vec!["1", "2", "3"]);
        assert_eq!(a, Some("40%"));

        assert!(split_args("1, 2, 3, 4, 5").is_none());
    }

    #[test]
    fn test_whitespace_and_case() {
        let c = parse("  RGBA( 10 , 20 , 30 , 0.5 )  ").unwrap();
        assert_eq!(c.to_rgb_string(), "rgba(10, 20, 30, 0.5)");
    }
}
