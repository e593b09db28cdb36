//! Color themes: true-color palettes mapping facelets to RGB.

use crate::cube::Facelet;

/// True-color RGB triple.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named palette for the six face colors plus the surrounding chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Display name shown in the HUD.
    pub name: &'static str,
    /// Top face.
    pub white: Rgb,
    /// Front face.
    pub green: Rgb,
    /// Left face.
    pub orange: Rgb,
    /// Bottom face.
    pub yellow: Rgb,
    /// Right face.
    pub red: Rgb,
    /// Back face.
    pub blue: Rgb,
    /// Background outside the net.
    pub background: Rgb,
    /// Instructional overlay text.
    pub overlay: Rgb,
}

impl Theme {
    /// Color for one facelet under this theme.
    pub const fn color(&self, facelet: Facelet) -> Rgb {
        match facelet {
            Facelet::White => self.white,
            Facelet::Green => self.green,
            Facelet::Orange => self.orange,
            Facelet::Yellow => self.yellow,
            Facelet::Red => self.red,
            Facelet::Blue => self.blue,
            Facelet::Blank => self.background,
        }
    }
}

/// All selectable themes; the theme keys cycle through this table.
pub const THEMES: [Theme; 4] = [
    // Official-ish sticker colors.
    Theme {
        name: "classic",
        white: Rgb::new(255, 255, 255),
        green: Rgb::new(0, 155, 72),
        orange: Rgb::new(255, 88, 0),
        yellow: Rgb::new(255, 213, 0),
        red: Rgb::new(183, 18, 52),
        blue: Rgb::new(0, 64, 173),
        background: Rgb::new(0, 0, 0),
        overlay: Rgb::new(102, 102, 102),
    },
    Theme {
        name: "neon",
        white: Rgb::new(240, 240, 240),
        green: Rgb::new(57, 255, 20),
        orange: Rgb::new(255, 95, 31),
        yellow: Rgb::new(250, 250, 51),
        red: Rgb::new(255, 49, 49),
        blue: Rgb::new(77, 77, 255),
        background: Rgb::new(10, 10, 20),
        overlay: Rgb::new(130, 130, 150),
    },
    Theme {
        name: "pastel",
        white: Rgb::new(250, 245, 235),
        green: Rgb::new(157, 216, 169),
        orange: Rgb::new(255, 179, 128),
        yellow: Rgb::new(253, 240, 134),
        red: Rgb::new(244, 151, 160),
        blue: Rgb::new(158, 183, 229),
        background: Rgb::new(30, 30, 35),
        overlay: Rgb::new(140, 140, 140),
    },
    // Grayscale, for monochrome-leaning terminals.
    Theme {
        name: "mono",
        white: Rgb::new(255, 255, 255),
        green: Rgb::new(190, 190, 190),
        orange: Rgb::new(150, 150, 150),
        yellow: Rgb::new(220, 220, 220),
        red: Rgb::new(110, 110, 110),
        blue: Rgb::new(70, 70, 70),
        background: Rgb::new(0, 0, 0),
        overlay: Rgb::new(120, 120, 120),
    },
];

/// Step a theme index forward (+1) or backward (−1), wrapping.
pub fn cycle_theme(index: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % THEMES.len()
    } else {
        (index + THEMES.len() - 1) % THEMES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_classic_keeps_the_original_palette() {
        let classic = THEMES[0];
        assert_eq!(classic.color(Facelet::Green), Rgb::new(0, 155, 72));
        assert_eq!(classic.color(Facelet::Red), Rgb::new(183, 18, 52));
        assert_eq!(classic.color(Facelet::Blank), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle_theme(THEMES.len() - 1, true), 0);
        assert_eq!(cycle_theme(0, false), THEMES.len() - 1);
        let mut idx = 2;
        idx = cycle_theme(idx, true);
        idx = cycle_theme(idx, false);
        assert_eq!(idx, 2);
    }
}
