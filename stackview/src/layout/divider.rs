//! Divider - a thin rule between content.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

use super::axis::Direction;
use super::base::{LayoutNode, node_builder_methods};
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::length::Length;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A rule `thickness` pixels thick and `length` long.
///
/// The color defaults to the theme's shadow color.
#[derive(Debug)]
pub struct Divider {
    node: LayoutNode,
    orientation: Orientation,
    thickness: f32,
    length: Length,
    color: Option<Color>,
    spacing: Length,
}

impl Divider {
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Column),
            orientation: Orientation::default(),
            thickness: 1.0,
            length: Length::from("100%"),
            color: None,
            spacing: Length::ZERO,
        }
    }

    pub fn vertical() -> Self {
        Self::new().orientation(Orientation::Vertical)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn thickness(mut self, px: f32) -> Self {
        self.thickness = px;
        self
    }

    pub fn length(mut self, length: impl Into<Length>) -> Self {
        self.length = length.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Margin shorthand applied on every side.
    pub fn spacing(mut self, spacing: impl Into<Length>) -> Self {
        self.spacing = spacing.into();
        self
    }

    node_builder_methods!();

    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>) {
        self.node.attach(ctx, parent);
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let thickness = Length::Px(self.thickness).to_css();
        let length = self.length.to_css();
        let (width, height) = match self.orientation {
            Orientation::Horizontal => (length, thickness),
            Orientation::Vertical => (thickness, length),
        };
        let color = self.color.unwrap_or(ctx.theme.shadow_color);
        let mut rule = StyleMap::new()
            .with("width", width)
            .with("height", height)
            .with("background-color", color.to_css());
        // The shorthand would reset per-edge margins set through `margin`.
        if self.node.margin.is_empty() {
            rule.set("margin", self.spacing.to_css());
        }
        BoxNode::new(BoxKind::Divider, self.node.render_style(ctx, &rule))
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::length::Edges;
    use crate::palette::CyclingPalette;
    use crate::theme::Theme;

    fn render_with(divider: &Divider, theme: &Theme) -> BoxNode {
        let mut palette = CyclingPalette::new();
        let mut ctx = RenderContext::new(theme, &mut palette);
        divider.render(&mut ctx)
    }

    #[test]
    fn test_horizontal_defaults() {
        let node = render_with(&Divider::new(), &Theme::light());
        assert_eq!(node.kind, BoxKind::Divider);
        assert_eq!(node.style("width"), Some("100%"));
        assert_eq!(node.style("height"), Some("1px"));
        assert_eq!(node.style("background-color"), Some("rgba(0, 0, 0, 0.1)"));
        assert_eq!(node.style("margin"), Some("0px"));
    }

    #[test]
    fn test_vertical_uses_theme_shadow() {
        let divider = Divider::vertical().thickness(2.0).length(24.0);
        let node = render_with(&divider, &Theme::dark());
        assert_eq!(node.style("width"), Some("2px"));
        assert_eq!(node.style("height"), Some("24px"));
        assert_eq!(node.style("background-color"), Some("rgba(255, 255, 255, 0.1)"));
    }

    #[test]
    fn test_per_edge_margin_is_kept() {
        let divider = Divider::new().margin(Edges::all(8.0)).spacing(4.0);
        let node = render_with(&divider, &Theme::light());
        assert_eq!(node.style("margin"), None);
        assert_eq!(node.style("margin-top"), Some("8px"));
        assert_eq!(node.style("margin-left"), Some("8px"));
    }

    #[test]
    fn test_explicit_color_and_override() {
        let divider = Divider::new()
            .color(Color::rgb8(0xff, 0x00, 0x00))
            .spacing("8px 0")
            .style("height", "3px");
        let node = render_with(&divider, &Theme::light());
        assert_eq!(node.style("background-color"), Some("#ff0000"));
        assert_eq!(node.style("margin"), Some("8px 0"));
        assert_eq!(node.style("height"), Some("3px"));
    }
}
