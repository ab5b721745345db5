//! RGBA color type with CSS-style parsing.
//!
//! Supported formats:
//!
//! - **Hex**: `#rgb`, `#rrggbb`, `#rrggbbaa`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Named**: CSS color names like `red`, `coral`, `rebeccapurple`
//! - **Special**: `transparent`

use std::fmt;

/// Error returned when color parsing fails.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// An RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Parses a CSS-style color string.
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ColorParseError {
                message: "expected a color".to_string(),
            });
        }
        if text == "transparent" {
            return Ok(Self::transparent());
        }
        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(args) = text
            .strip_prefix("rgba(")
            .or_else(|| text.strip_prefix("rgb("))
        {
            return Self::parse_rgb_args(args);
        }
        named_color(text).ok_or_else(|| ColorParseError {
            message: format!("unable to parse {text:?} as a color"),
        })
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError {
            message: format!("invalid hex color \"#{hex}\""),
        };
        let component = |range: &str| u8::from_str_radix(range, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut parts = hex.chars().map(|ch| {
                    component(&format!("{ch}{ch}"))
                });
                Ok(Self::rgb(
                    parts.next().unwrap()?,
                    parts.next().unwrap()?,
                    parts.next().unwrap()?,
                ))
            }
            6 | 8 => {
                let r = component(&hex[0..2])?;
                let g = component(&hex[2..4])?;
                let b = component(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    component(&hex[6..8])? as f32 / 255.0
                } else {
                    1.0
                };
                Ok(Self::rgba(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    fn parse_rgb_args(args: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError {
            message: format!("invalid rgb() arguments {args:?}"),
        };
        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha = a.parse::<f32>().map_err(|_| invalid())?;
                Ok(Self::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
            }
            _ => Err(invalid()),
        }
    }
}

/// CSS named colors recognized by [`Color::parse`].
fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "lime" => (0, 255, 0),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "coral" => (255, 127, 80),
        "crimson" => (220, 20, 60),
        "gold" => (255, 215, 0),
        "indigo" => (75, 0, 130),
        "ivory" => (255, 255, 240),
        "khaki" => (240, 230, 140),
        "lavender" => (230, 230, 250),
        "orchid" => (218, 112, 214),
        "plum" => (221, 160, 221),
        "salmon" => (250, 128, 114),
        "sienna" => (160, 82, 45),
        "skyblue" => (135, 206, 235),
        "slategray" | "slategrey" => (112, 128, 144),
        "tan" => (210, 180, 140),
        "tomato" => (255, 99, 71),
        "turquoise" => (64, 224, 208),
        "violet" => (238, 130, 238),
        "wheat" => (245, 222, 179),
        "azure" => (240, 255, 255),
        "beige" => (245, 245, 220),
        "chocolate" => (210, 105, 30),
        "darkblue" => (0, 0, 139),
        "darkgreen" => (0, 100, 0),
        "darkred" => (139, 0, 0),
        "dodgerblue" => (30, 144, 255),
        "firebrick" => (178, 34, 34),
        "forestgreen" => (34, 139, 34),
        "hotpink" => (255, 105, 180),
        "lightblue" => (173, 216, 230),
        "lightgreen" => (144, 238, 144),
        "rebeccapurple" => (102, 51, 153),
        "royalblue" => (65, 105, 225),
        "seagreen" => (46, 139, 87),
        "steelblue" => (70, 130, 180),
        _ => return None,
    };
    Some(Color::rgb(r, g, b))
}
