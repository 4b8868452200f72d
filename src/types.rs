//! Shared types used across iconset.
//! Includes `TargetSize` (exact output dimensions) and `ColorMode`.
use std::fmt;
use std::str::FromStr;

use image::ColorType;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Exact output dimensions in pixels. Aspect ratio of the source is not kept.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self, Error> {
        Self::new(side, side)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Default icon sizes: 16, 48 and 128 pixel squares.
pub const DEFAULT_SIZES: [TargetSize; 3] = [
    TargetSize { width: 16, height: 16 },
    TargetSize { width: 48, height: 48 },
    TargetSize { width: 128, height: 128 },
];

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `N` for an N×N square or `WxH`.
impl FromStr for TargetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "size",
            value: s.to_string(),
        };
        let s_trim = s.trim();
        match s_trim.split_once(['x', 'X']) {
            Some((w, h)) => {
                let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
                let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
                TargetSize::new(width, height)
            }
            None => {
                let side = s_trim.parse::<u32>().map_err(|_| invalid())?;
                TargetSize::square(side)
            }
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    L8,
    La8,
    Rgb8,
    Rgba8,
    L16,
    La16,
    Rgb16,
    Rgba16,
    Rgb32F,
    Rgba32F,
}

impl TryFrom<ColorType> for ColorMode {
    type Error = Error;

    fn try_from(color: ColorType) -> Result<Self, Self::Error> {
        Ok(match color {
            ColorType::L8 => ColorMode::L8,
            ColorType::La8 => ColorMode::La8,
            ColorType::Rgb8 => ColorMode::Rgb8,
            ColorType::Rgba8 => ColorMode::Rgba8,
            ColorType::L16 => ColorMode::L16,
            ColorType::La16 => ColorMode::La16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::Rgb32F,
            ColorType::Rgba32F => ColorMode::Rgba32F,
            other => {
                return Err(Error::UnsupportedColor {
                    color: format!("{:?}", other),
                });
            }
        })
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::L8 => "L8",
            ColorMode::La8 => "LA8",
            ColorMode::Rgb8 => "RGB8",
            ColorMode::Rgba8 => "RGBA8",
            ColorMode::L16 => "L16",
            ColorMode::La16 => "LA16",
            ColorMode::Rgb16 => "RGB16",
            ColorMode::Rgba16 => "RGBA16",
            ColorMode::Rgb32F => "RGB32F",
            ColorMode::Rgba32F => "RGBA32F",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_square_and_rectangular_sizes() {
        assert_eq!("16".parse::<TargetSize>().unwrap(), TargetSize::square(16).unwrap());
        assert_eq!(
            "32x24".parse::<TargetSize>().unwrap(),
            TargetSize::new(32, 24).unwrap()
        );
        assert_eq!(
            " 64X48 ".parse::<TargetSize>().unwrap(),
            TargetSize::new(64, 48).unwrap()
        );
    }

    #[test]
    fn rejects_zero_and_garbage_sizes() {
        assert!(matches!(
            "0".parse::<TargetSize>(),
            Err(Error::ZeroSize { width: 0, height: 0 })
        ));
        assert!(matches!("0x5".parse::<TargetSize>(), Err(Error::ZeroSize { .. })));
        assert!(matches!(
            "abc".parse::<TargetSize>(),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
        assert!(matches!("16x".parse::<TargetSize>(), Err(Error::InvalidArgument { .. })));
        assert!(matches!("-4".parse::<TargetSize>(), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn display_is_width_by_height() {
        assert_eq!(DEFAULT_SIZES[1].to_string(), "48x48");
        assert!(DEFAULT_SIZES.iter().all(TargetSize::is_square));
    }

    #[test]
    fn color_mode_mirrors_color_type() {
        assert_eq!(ColorMode::try_from(ColorType::Rgba8).unwrap(), ColorMode::Rgba8);
        assert_eq!(ColorMode::try_from(ColorType::La16).unwrap(), ColorMode::La16);
        assert_eq!(ColorMode::Rgba8.to_string(), "RGBA8");
    }
}
