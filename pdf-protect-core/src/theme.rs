//! Dark and light colour palettes

use std::fmt;
use std::str::FromStr;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#1a73e8`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colours a front end applies to its widgets and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Input fields and group boxes
    pub surface: Rgb,
    pub border: Rgb,
    /// Primary buttons and highlights
    pub accent: Rgb,
    pub accent_hover: Rgb,
    pub accent_disabled: Rgb,
}

const DARK: Palette = Palette {
    background: Rgb(0x0f, 0x12, 0x18),
    foreground: Rgb(0xe6, 0xe8, 0xee),
    surface: Rgb(0x17, 0x1b, 0x22),
    border: Rgb(0x2a, 0x2f, 0x3a),
    accent: Rgb(0x3b, 0x82, 0xf6),
    accent_hover: Rgb(0x25, 0x63, 0xeb),
    accent_disabled: Rgb(0x27, 0x34, 0x4d),
};

const LIGHT: Palette = Palette {
    background: Rgb(0xf7, 0xf7, 0xfb),
    foreground: Rgb(0x20, 0x21, 0x24),
    surface: Rgb(0xff, 0xff, 0xff),
    border: Rgb(0xd0, 0xd3, 0xd8),
    accent: Rgb(0x1a, 0x73, 0xe8),
    accent_hover: Rgb(0x16, 0x69, 0xc1),
    accent_disabled: Rgb(0x9b, 0xb7, 0xe6),
};

/// Visual theme. Dark is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}
