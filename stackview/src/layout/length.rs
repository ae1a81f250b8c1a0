//! Length and spacing types.
//!
//! Lengths are either pixel counts or raw box-model length strings
//! (`"50%"`, `"2rem"`), rendered verbatim.

use serde::{Deserialize, Serialize};

use super::style::StyleMap;

/// A box-model length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    /// Pixel length, rendered as `<n>px`.
    Px(f32),
    /// Any other length string, rendered as-is.
    Raw(String),
}

impl Length {
    pub const ZERO: Self = Length::Px(0.0);

    /// Render as a box-model value.
    pub fn to_css(&self) -> String {
        match self {
            Length::Px(px) => format!("{}px", px),
            Length::Raw(raw) => raw.clone(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Px(px)
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Length::Px(px as f32)
    }
}

impl From<&str> for Length {
    fn from(raw: &str) -> Self {
        Length::Raw(raw.to_string())
    }
}

impl From<String> for Length {
    fn from(raw: String) -> Self {
        Length::Raw(raw)
    }
}

/// Per-edge spacing (margin or padding). Unset edges emit no declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

impl Edges {
    /// Explicit values for each side.
    pub fn new(
        top: impl Into<Length>,
        right: impl Into<Length>,
        bottom: impl Into<Length>,
        left: impl Into<Length>,
    ) -> Self {
        Self {
            top: Some(top.into()),
            right: Some(right.into()),
            bottom: Some(bottom.into()),
            left: Some(left.into()),
        }
    }

    /// Same value on all sides.
    pub fn all(value: impl Into<Length>) -> Self {
        let value = value.into();
        Self {
            top: Some(value.clone()),
            right: Some(value.clone()),
            bottom: Some(value.clone()),
            left: Some(value),
        }
    }

    /// Symmetric spacing (horizontal, vertical).
    pub fn symmetric(horizontal: impl Into<Length>, vertical: impl Into<Length>) -> Self {
        let horizontal = horizontal.into();
        let vertical = vertical.into();
        Self {
            top: Some(vertical.clone()),
            right: Some(horizontal.clone()),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }

    pub fn top(mut self, value: impl Into<Length>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<Length>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<Length>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<Length>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Write `<prefix>-top` .. `<prefix>-left` for every set edge.
    pub(crate) fn declare(&self, prefix: &str, style: &mut StyleMap) {
        let edges = [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ];
        for (edge, value) in edges {
            if let Some(value) = value {
                style.set(format!("{}-{}", prefix, edge), value.to_css());
            }
        }
    }
}
