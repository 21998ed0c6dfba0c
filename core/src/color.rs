//! Named colors: the body palette plus the fixed UI colors.

use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
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

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Body colors. The generator picks from a configured subset of these,
/// in the order they are listed in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyColor {
    White,
    Yellow,
    Orange,
    Red,
    Blue,
    LightBlue,
    Purple,
}

impl BodyColor {
    /// Palette used when the config does not name one.
    pub const DEFAULT_PALETTE: [BodyColor; 6] = [
        BodyColor::White,
        BodyColor::Yellow,
        BodyColor::Orange,
        BodyColor::Red,
        BodyColor::Blue,
        BodyColor::LightBlue,
    ];

    pub fn rgb(&self) -> Rgb {
        match self {
            Self::White     => Rgb::new(255, 255, 255),
            Self::Yellow    => Rgb::new(255, 255, 0),
            Self::Orange    => Rgb::new(255, 165, 0),
            Self::Red       => Rgb::new(255, 0, 0),
            Self::Blue      => Rgb::new(0, 0, 255),
            Self::LightBlue => Rgb::new(173, 216, 230),
            Self::Purple    => Rgb::new(160, 32, 240),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White     => "white",
            Self::Yellow    => "yellow",
            Self::Orange    => "orange",
            Self::Red       => "red",
            Self::Blue      => "blue",
            Self::LightBlue => "light_blue",
            Self::Purple    => "purple",
        }
    }
}
