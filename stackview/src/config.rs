//! Render configuration.
//!
//! ```json
//! { "color_scheme": "dark", "palette": { "mode": "seeded", "seed": 7 }, "debug_borders": true }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::palette::{CyclingPalette, PaletteSource, SeededPalette};
use crate::theme::ColorScheme;

/// How debug border colors are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteMode {
    /// Palette order, wrapping.
    #[default]
    Cycle,
    /// Seeded random picks.
    Seeded { seed: u64 },
}

impl PaletteMode {
    pub fn build(self) -> Box<dyn PaletteSource> {
        match self {
            PaletteMode::Cycle => Box::new(CyclingPalette::new()),
            PaletteMode::Seeded { seed } => Box::new(SeededPalette::new(seed)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub color_scheme: ColorScheme,
    pub palette: PaletteMode,
    /// Draw diagnostic borders on every layout node.
    pub debug_borders: bool,
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.palette, PaletteMode::Cycle);
        assert!(!config.debug_borders);
    }

    #[test]
    fn test_full_json() {
        let config = RenderConfig::from_json(
            r#"{"color_scheme":"dark","palette":{"mode":"seeded","seed":7},"debug_borders":true}"#,
        )
        .unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.palette, PaletteMode::Seeded { seed: 7 });
        assert!(config.debug_borders);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = RenderConfig::from_json(r#"{"color_scheme":"sepia"}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn test_seeded_mode_builds_reproducible_source() {
        let mut a = PaletteMode::Seeded { seed: 3 }.build();
        let mut b = PaletteMode::Seeded { seed: 3 }.build();
        assert_eq!(a.next_color(), b.next_color());
    }
}
