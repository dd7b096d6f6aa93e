use std::fmt;
use std::str::FromStr;

use palette::Srgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A paint value. Widgets expose colors as CSS-style strings (`#6c6c72`,
/// `transparent`) through element attributes, so `Display` round-trips that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Rgb(Rgb),
    Transparent,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or the keyword `transparent`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("transparent") {
            return Some(Self::Transparent);
        }
        let srgb: Srgb<u8> = Srgb::from_str(value).ok()?;
        Some(Self::rgb(srgb.red, srgb.green, srgb.blue))
    }

    /// The opaque RGB value, if any.
    pub fn to_rgb(self) -> Option<Rgb> {
        match self {
            Self::Rgb(rgb) => Some(rgb),
            Self::Transparent => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(Rgb { r, g, b }) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}
