use crate::animation::DEFAULT_DURATION;
use crate::icon::IconName;
use crate::item::{Item, Label};
use derive_more::{Deref, From, Into};
use palette::Srgba;
use palette::rgb::{FromHexError, Srgb};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Invalid color '{value}': {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: FromHexError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let rgb: Srgb<f64> = Srgb::new(red, green, blue).into_format();
        Self(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0))
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        let (r, g, b, _) = self.components();
        Self(Srgba::new(r, g, b, alpha))
    }

    pub fn components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    pub fn alpha(self) -> f64 {
        self.0.alpha
    }

    pub fn white() -> Self {
        Self::from_rgb8(0xFF, 0xFF, 0xFF)
    }

    pub fn gray() -> Self {
        Self::from_rgb8(0x88, 0x88, 0x88)
    }

    pub fn default_button() -> Self {
        Self::from_rgb8(0xFC, 0x51, 0x6A)
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.trim().parse().map_err(|source| StyleError::InvalidColor {
            value: s.to_string(),
            source,
        })?;
        Ok(Self::from_rgb8(rgb.red, rgb.green, rgb.blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, _) = self.components();
        write!(f, "#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
    }
}

/// Compass shorthand for item angles, with each discriminant holding its
/// angle in degrees.
///
/// Items sit at `center - distance * (cos, sin)`. The minus sign flips the
/// usual unit circle, and the y-down surface flips it again vertically, so
/// 0 degrees lands west of the button and angles grow clockwise through
/// north. The compass therefore starts at west rather than east.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[repr(i32)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(serialize = "West", serialize = "w")]
    West = 0,
    #[strum(to_string = "NorthWest", serialize = "north-west", serialize = "nw")]
    NorthWest = 45,
    #[strum(serialize = "North", serialize = "n")]
    North = 90,
    #[strum(to_string = "NorthEast", serialize = "north-east", serialize = "ne")]
    NorthEast = 135,
    #[strum(serialize = "East", serialize = "e")]
    East = 180,
    #[strum(to_string = "SouthEast", serialize = "south-east", serialize = "se")]
    SouthEast = 225,
    #[strum(serialize = "South", serialize = "s")]
    South = 270,
    #[strum(to_string = "SouthWest", serialize = "south-west", serialize = "sw")]
    SouthWest = 315,
}

impl Direction {
    pub fn degrees(&self) -> i32 {
        *self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Angle {
    Degrees(i32),
    Direction(Direction),
}

impl Angle {
    pub fn degrees(&self) -> i32 {
        match self {
            Self::Degrees(degrees) => *degrees,
            Self::Direction(direction) => direction.degrees(),
        }
    }
}

/// Converts density-independent (dp) and scale-independent (sp) lengths
/// into surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayScale {
    pub density: f64,
    pub font_scale: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self {
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl DisplayScale {
    pub fn dp(&self, value: f64) -> f64 {
        value * self.density
    }

    pub fn sp(&self, value: f64) -> f64 {
        value * self.density * self.font_scale
    }
}

/// Button appearance as written in configuration: lengths in dp, text size
/// in sp and duration in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub collapse_radius: f64,
    pub expand_radius: f64,
    pub text: Option<Label>,
    pub text_size: f64,
    pub text_color: Color,
    pub button_color: Color,
    pub duration: u64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            collapse_radius: 40.0,
            expand_radius: 120.0,
            text: None,
            text_size: 30.0,
            text_color: Color::gray(),
            button_color: Color::default_button(),
            duration: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

impl StyleConfig {
    pub fn resolve(&self, scale: &DisplayScale) -> ButtonStyle {
        ButtonStyle {
            collapse_radius: scale.dp(self.collapse_radius),
            expand_radius: scale.dp(self.expand_radius),
            text: self.text.clone(),
            text_size: scale.sp(self.text_size),
            text_color: self.text_color,
            button_color: self.button_color,
            duration: Duration::from_millis(self.duration),
        }
    }
}

/// Resolved button appearance in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub collapse_radius: f64,
    pub expand_radius: f64,
    pub text: Option<Label>,
    pub text_size: f64,
    pub text_color: Color,
    pub button_color: Color,
    pub duration: Duration,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        StyleConfig::default().resolve(&DisplayScale::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub text: Label,
    pub radius: f64,
    #[serde(default)]
    pub icon: Option<IconName>,
    pub angle: Angle,
    pub distance: f64,
}

impl ItemConfig {
    pub fn resolve(&self, scale: &DisplayScale) -> Item {
        Item::new(
            self.text.clone(),
            scale.dp(self.radius),
            self.icon.clone(),
            self.angle.degrees(),
            scale.dp(self.distance),
        )
    }
}
