//! Colors
//!
//! Colors are straight (non-premultiplied) RGBA with f32 channels in 0.0..=1.0.
//! Hosts usually hand colors over as packed `0xAARRGGBB` integers or as hex
//! strings from style attributes; both forms convert losslessly to `Color`.

use thiserror::Error;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Errors from parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The digit count is not 3, 6 or 8
    #[error("color '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    /// A character is not a hex digit
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    /// Fully transparent white, the fade-out end of every shadow gradient
    pub const TRANSPARENT_WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        Self::from_argb(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    /// Color from a packed `0xAARRGGBB` integer
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    /// Pack into `0xAARRGGBB`, rounding each channel to 8 bits
    pub fn to_argb(&self) -> u32 {
        let channel = |v: f32| ((v.clamp(0.0, 1.0) * 255.0).round() as u32) & 0xFF;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB`
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !matches!(digits.len(), 3 | 6 | 8) {
            return Err(ColorParseError::InvalidLength(input.to_string()));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;

        match digits.len() {
            3 => {
                let expand = |nibble: u32| (nibble & 0xF) * 0x11;
                let rgb = (expand(value >> 8) << 16) | (expand(value >> 4) << 8) | expand(value);
                Ok(Self::from_hex(rgb))
            }
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb() {
        let color = Color::from_argb(0x80FF_0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_argb_round_trip() {
        for argb in [0xFF00_0000, 0x00FF_FFFF, 0x4012_3456, 0xFFFF_FFFF] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse_hex("#ff0000").unwrap(), Color::RED);
        assert_eq!(
            Color::parse_hex("#00FFFFFF").unwrap(),
            Color::TRANSPARENT_WHITE
        );
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            Color::parse_hex("000000"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }
}
