//! Curated five-color palettes for the gallery screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [&'static str; 5],
}

pub const PALETTES: &[Palette] = &[
    Palette {
        name: "Material Design",
        colors: ["#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5"],
    },
    Palette {
        name: "Pastel Dreams",
        colors: ["#FFB7B2", "#FFDAC1", "#E2F0CB", "#B5EAD7", "#C7CEEA"],
    },
    Palette {
        name: "Dark Mode",
        colors: ["#121212", "#1E1E1E", "#2C2C2C", "#383838", "#BB86FC"],
    },
    Palette {
        name: "Ocean Blue",
        colors: ["#006994", "#0096C7", "#00B4D8", "#48CAE4", "#90E0EF"],
    },
    Palette {
        name: "Forest",
        colors: ["#2D6A4F", "#40916C", "#52B788", "#74C69D", "#95D5B2"],
    },
    Palette {
        name: "Sunset",
        colors: ["#FF9F1C", "#FFBF69", "#FFFFFF", "#CBF3F0", "#2EC4B6"],
    },
    Palette {
        name: "Neon Cyber",
        colors: ["#FF00FF", "#00FFFF", "#00FF00", "#FFFF00", "#FF0000"],
    },
    Palette {
        name: "Coffee",
        colors: ["#6F4E37", "#A67B5B", "#ECB176", "#FED8B1", "#F6F1E9"],
    },
    Palette {
        name: "Berry Smoothie",
        colors: ["#720026", "#CE4257", "#FF7F51", "#FF9B54", "#FFCE7C"],
    },
    Palette {
        name: "Monochrome",
        colors: ["#000000", "#333333", "#666666", "#999999", "#CCCCCC"],
    },
];

pub const SWATCHES_PER_PALETTE: usize = 5;

pub fn swatch(palette: usize, index: usize) -> Option<&'static str> {
    PALETTES.get(palette)?.colors.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_every_swatch_parses() {
        assert_eq!(PALETTES.len(), 10);
        for p in PALETTES {
            for c in p.colors {
                assert!(Color::is_valid(c), "{} in {}", c, p.name);
            }
        }
    }

    #[test]
    fn test_swatch_lookup() {
        assert_eq!(swatch(0, 0), Some("#F44336"));
        assert_eq!(swatch(9, 4), Some("#CCCCCC"));
        assert_eq!(swatch(10, 0), None);
        assert_eq!(swatch(0, SWATCHES_PER_PALETTE), None);
    }
}
