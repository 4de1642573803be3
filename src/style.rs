// Style configuration module
// Colors, label texts, and sizing defaults for the fold widget

use std::str::FromStr;
use thiserror::Error;

/// Error raised when a CLI color value cannot be parsed
#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("color must be #RRGGBB or #AARRGGBB, got \"{0}\"")]
    BadFormat(String),
    #[error("invalid hex digits in \"{0}\"")]
    BadHex(String),
}

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Byte order expected by the Argb8888 shm canvas (little-endian)
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Linear-space components for the GPU pipeline
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(v: u8) -> f32 {
            let v = v as f32 / 255.0;
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::BadFormat(s.to_string()))?;
        if !hex.is_ascii() {
            return Err(ColorParseError::BadHex(s.to_string()));
        }

        let parse = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::BadHex(s.to_string()))
        };

        match hex.len() {
            6 => Ok(Color::rgb(
                parse(&hex[0..2])?,
                parse(&hex[2..4])?,
                parse(&hex[4..6])?,
            )),
            8 => Ok(Color::rgba(
                parse(&hex[2..4])?,
                parse(&hex[4..6])?,
                parse(&hex[6..8])?,
                parse(&hex[0..2])?,
            )),
            _ => Err(ColorParseError::BadFormat(s.to_string())),
        }
    }
}

/// Complete widget styling, immutable after construction.
///
/// Mirrors the styleable attribute surface of the original widget with an
/// explicit struct and documented defaults instead of host theming.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldStyle {
    /// Front face color of the peeled corner (default gray)
    pub fold_color: Color,
    /// Back/reverse face color of the peeled corner (default white)
    pub mirror_color: Color,
    /// Base card fill behind everything (default warm off-white)
    pub card_color: Color,
    /// Title label; `None` draws nothing
    pub title_text: Option<String>,
    pub title_color: Color,
    /// Title font size in device pixels
    pub title_size: f32,
    /// Size label below the title; `None` draws nothing
    pub size_text: Option<String>,
    pub size_color: Color,
    /// Size-label font size in device pixels
    pub size_size: f32,
    /// Left margin for both labels
    pub text_margin_left: f32,
    /// Vertical offset of the size label from the widget top
    pub size_margin_top: f32,
    /// Initial fold point offset from the bottom-right corner, used until
    /// the first pointer event arrives
    pub fold_width: f32,
    pub fold_height: f32,
}

impl Default for FoldStyle {
    fn default() -> Self {
        Self {
            fold_color: Color::rgb(0x80, 0x80, 0x80),
            mirror_color: Color::rgb(0xff, 0xff, 0xff),
            card_color: Color::rgb(0xfa, 0xfa, 0xf5),
            title_text: None,
            title_color: Color::rgb(0x21, 0x21, 0x21),
            title_size: 16.0,
            size_text: None,
            size_color: Color::rgb(0x75, 0x75, 0x75),
            size_size: 12.0,
            text_margin_left: 12.0,
            size_margin_top: 22.0,
            fold_width: 48.0,
            fold_height: 48.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb() {
        assert_eq!("#808080".parse(), Ok(Color::rgb(0x80, 0x80, 0x80)));
        assert_eq!("#FFFFFF".parse(), Ok(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn parse_argb() {
        assert_eq!(
            "#80FF0000".parse(),
            Ok(Color::rgba(0xff, 0x00, 0x00, 0x80))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "808080".parse::<Color>(),
            Err(ColorParseError::BadFormat(_))
        ));
        assert!(matches!(
            "#80".parse::<Color>(),
            Err(ColorParseError::BadFormat(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorParseError::BadHex(_))
        ));
    }

    #[test]
    fn bgra_byte_order() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_bgra(), [3, 2, 1, 4]);
    }

    #[test]
    fn defaults_match_documented_values() {
        let style = FoldStyle::default();
        assert_eq!(style.fold_color, Color::rgb(0x80, 0x80, 0x80));
        assert_eq!(style.mirror_color, Color::rgb(0xff, 0xff, 0xff));
        assert!(style.title_text.is_none());
        assert_eq!(style.fold_width, 48.0);
        assert_eq!(style.fold_height, 48.0);
    }
}
