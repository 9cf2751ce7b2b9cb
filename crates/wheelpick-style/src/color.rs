#![forbid(unsafe_code)]

//! Color type with CSS-compatible parsing and formatting.
//!
//! Wheel hosts usually receive colors as CSS strings (`"#666"`,
//! `"rgba(0, 0, 0, 0.05)"`). [`Color`] parses the subset the picker themes
//! use and formats back to the shortest faithful CSS form, so a color can
//! make a round trip through configuration files unchanged.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not a recognized color syntax.
    #[error("unrecognized color syntax: {0:?}")]
    Syntax(String),
    /// A hex digit or numeric component failed to parse.
    #[error("invalid color component {component:?} in {input:?}")]
    Component {
        /// The offending component text.
        component: String,
        /// The full input.
        input: String,
    },
}

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0.0, 1.0]`.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    /// Opaque color from channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from channels and alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiply alpha by `factor` (used for opacity falloff).
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Whether alpha is 1.0.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Parse a CSS color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`,
    /// `rgba(..)`, or `transparent`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex, input);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, input);
        }
        Err(ColorParseError::Syntax(input.to_string()))
    }
}

fn component_error(component: &str, input: &str) -> ColorParseError {
    ColorParseError::Component {
        component: component.to_string(),
        input: input.to_string(),
    }
}

fn parse_hex(hex: &str, input: &str) -> Result<Color, ColorParseError> {
    let nibble = |c: char| {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| component_error(&c.to_string(), input))
    };
    let pair = |s: &str| u8::from_str_radix(s, 16).map_err(|_| component_error(s, input));

    if !hex.is_ascii() {
        return Err(ColorParseError::Syntax(input.to_string()));
    }
    match hex.len() {
        3 => {
            let mut chans = [0u8; 3];
            for (slot, c) in chans.iter_mut().zip(hex.chars()) {
                let n = nibble(c)?;
                *slot = (n << 4) | n;
            }
            Ok(Color::rgb(chans[0], chans[1], chans[2]))
        }
        6 | 8 => {
            let r = pair(&hex[0..2])?;
            let g = pair(&hex[2..4])?;
            let b = pair(&hex[4..6])?;
            let a = if hex.len() == 8 {
                f32::from(pair(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Ok(Color::rgba(r, g, b, a))
        }
        _ => Err(ColorParseError::Syntax(input.to_string())),
    }
}

fn parse_functional(body: &str, input: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::Syntax(input.to_string()));
    }
    let channel = |s: &str| -> Result<u8, ColorParseError> {
        let v: f32 = s.parse().map_err(|_| component_error(s, input))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(component_error(s, input));
        }
        Ok(v.round() as u8)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(s) => {
            let v: f32 = s.parse().map_err(|_| component_error(s, input))?;
            if !(0.0..=1.0).contains(&v) {
                return Err(component_error(s, input));
            }
            v
        }
        None => 1.0,
    };
    Ok(Color::rgba(r, g, b, a))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
