use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::named_colors::NAMED_COLORS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color channel {channel} must be within [0, 255], got {value}")]
    InvalidChannelValue { channel: &'static str, value: i32 },
    #[error("unknown color '{name}' (key={key})")]
    UnknownColorName { name: String, key: String },
    #[error("cannot build a color from {0}")]
    InvalidColorInput(String),
}

/// Truncates a channel value into `[0, 255]`.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Immutable RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from untrusted channel values.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        Ok(Self {
            red: checked_channel("red", red)?,
            green: checked_channel("green", green)?,
            blue: checked_channel("blue", blue)?,
        })
    }

    /// Per-channel average of two colors.
    pub fn mix(self, other: Color) -> Color {
        self.combine(other, |a, b| (a + b) / 2)
    }

    /// Mixes colors as a right fold: `mix(c1, mix(c2, mix(c3, ...)))`.
    ///
    /// Mixing is not associative, so the fold order matters.
    pub fn mix_all(colors: &[Color]) -> Option<Color> {
        let (last, rest) = colors.split_last()?;
        Some(rest.iter().rev().fold(*last, |acc, color| color.mix(acc)))
    }

    /// Looks up a color by name, normalizing case, spaces and `grey`.
    pub fn named(name: &str) -> Result<Color, ColorError> {
        let key = name.to_lowercase().replace(' ', "_").replace("grey", "gray");
        NAMED_COLORS
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ColorError::UnknownColorName {
                name: name.to_string(),
                key,
            })
    }

    pub fn resolve(spec: impl Into<ColorSpec>) -> Result<Color, ColorError> {
        spec.into().resolve()
    }

    /// RGBA bytes with full opacity.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 0xff]
    }

    fn combine(self, other: Color, op: impl Fn(i32, i32) -> i32) -> Color {
        Color {
            red: clamp_channel(op(i32::from(self.red), i32::from(other.red))),
            green: clamp_channel(op(i32::from(self.green), i32::from(other.green))),
            blue: clamp_channel(op(i32::from(self.blue), i32::from(other.blue))),
        }
    }
}

fn checked_channel(channel: &'static str, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::InvalidChannelValue { channel, value })
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        self.combine(other, |a, b| a + b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Color {
        self.combine(other, |a, b| a - b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::named(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::rgb(red, green, blue)
    }
}

/// A caller-supplied color description, resolved lazily.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    Color(Color),
    Rgb(i32, i32, i32),
    Name(String),
}

impl ColorSpec {
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            ColorSpec::Color(color) => Ok(*color),
            ColorSpec::Rgb(r, g, b) => Color::new(*r, *g, *b),
            ColorSpec::Name(name) => Color::named(name),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Color(color)
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Name(name)
    }
}

impl From<(i32, i32, i32)> for ColorSpec {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from(rgb: (u8, u8, u8)) -> Self {
        ColorSpec::Color(rgb.into())
    }
}
