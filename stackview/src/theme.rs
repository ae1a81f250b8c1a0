//! Theme palettes and the render environment.
//!
//! The layout core only reads `shadow_color` (the divider default); the
//! rest of the palette is exposed for host content.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Fixed tint colors, identical in every scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tints {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub light: Color,
    pub dark: Color,
}

impl Tints {
    pub fn standard() -> Self {
        Self {
            primary: Color::rgb8(0x00, 0x7b, 0xff),
            secondary: Color::rgb8(0x6c, 0x75, 0x7d),
            success: Color::rgb8(0x28, 0xa7, 0x45),
            info: Color::rgb8(0x17, 0xa2, 0xb8),
            warning: Color::rgb8(0xff, 0xc1, 0x07),
            danger: Color::rgb8(0xdc, 0x35, 0x45),
            light: Color::rgb8(0xf8, 0xf9, 0xfa),
            dark: Color::rgb8(0x34, 0x3a, 0x40),
        }
    }
}

const ACCENT: (u8, u8, u8) = (0x73, 0xae, 0x57);

/// Named colors for one scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub background_emphasis: Color,
    pub foreground: Color,
    pub accent: Color,
    pub border: Color,
    pub primary_button: Color,
    pub secondary_button: Color,
    pub primary_text: Color,
    pub secondary_text: Color,
    /// Default divider color.
    pub shadow_color: Color,
    pub opacity: f32,
    pub tints: Tints,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            primary: Color::rgb8(0x00, 0x7b, 0xff),
            secondary: Color::rgb8(0x8c, 0x99, 0x9b),
            background: Color::rgb8(0xf8, 0xf9, 0xfa),
            background_emphasis: Color::rgb8(0xe5, 0xe5, 0xe5),
            foreground: Color::BLACK,
            accent: Color::rgb8(ACCENT.0, ACCENT.1, ACCENT.2),
            border: Color::rgb8(0xe5, 0xe5, 0xe5),
            primary_button: Color::rgb8(0x00, 0x7b, 0xff),
            secondary_button: Color::rgb8(0x6c, 0x75, 0x7d),
            primary_text: Color::BLACK,
            secondary_text: Color::rgb8(0x6c, 0x75, 0x7d),
            shadow_color: Color::BLACK.with_alpha(0.1),
            opacity: 1.0,
            tints: Tints::standard(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::rgb8(0x0a, 0x84, 0xff),
            secondary: Color::rgb8(0x8e, 0x8e, 0x93),
            background: Color::rgb8(0x1e, 0x1e, 0x1e),
            background_emphasis: Color::rgb8(0x31, 0x2f, 0x2f),
            foreground: Color::WHITE,
            accent: Color::rgb8(ACCENT.0, ACCENT.1, ACCENT.2),
            border: Color::rgb8(0x2c, 0x2c, 0x2e),
            primary_button: Color::rgb8(0x0a, 0x84, 0xff),
            secondary_button: Color::rgb8(0x8e, 0x8e, 0x93),
            primary_text: Color::WHITE,
            secondary_text: Color::rgb8(0x8e, 0x8e, 0x93),
            shadow_color: Color::WHITE.with_alpha(0.1),
            opacity: 1.0,
            tints: Tints::standard(),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Appearance state shared by a render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    color_scheme: ColorScheme,
    theme: Theme,
}

impl Environment {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            theme: Theme::for_scheme(color_scheme),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) {
        self.set_color_scheme(self.color_scheme.toggled());
    }

    pub fn set_color_scheme(&mut self, color_scheme: ColorScheme) {
        tracing::debug!(?color_scheme, "color scheme changed");
        self.color_scheme = color_scheme;
        self.theme = Theme::for_scheme(color_scheme);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
