//! Core primitive types for stackview.
//!
//! Colors are stored as normalized RGBA and rendered as box-model color
//! values (`#rrggbb` when opaque, `rgba(...)` otherwise).

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// An RGBA color with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color from RGB values (0-255).
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, LayoutError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LayoutError::InvalidColor(hex.to_string()));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(LayoutError::InvalidColor(hex.to_string())),
        };
        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|_| LayoutError::InvalidColor(hex.to_string()))?;
        Ok(Self::rgb8(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ))
    }

    /// Return this color with a different alpha value.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// 8-bit RGB channels.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Render as a box-model color value.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.a.clamp(0.0, 1.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_and_short() {
        assert_eq!(Color::from_hex("#007bff").unwrap().to_css(), "#007bff");
        assert_eq!(Color::from_hex("abc").unwrap().to_css(), "#aabbcc");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(matches!(Color::from_hex("#+12345"), Err(LayoutError::InvalidColor(_))));
        assert!(Color::from_hex("-12").is_err());
    }

    #[test]
    fn test_with_alpha_renders_rgba() {
        let shadow = Color::BLACK.with_alpha(0.1);
        assert_eq!(shadow.to_css(), "rgba(0, 0, 0, 0.1)");

        let accent = Color::from_hex("#73AE57").unwrap().with_alpha(0.5);
        assert_eq!(accent.to_css(), "rgba(115, 174, 87, 0.5)");
    }
}
