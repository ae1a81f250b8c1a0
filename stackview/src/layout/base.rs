//! The layout node shared by every container.
//!
//! `LayoutNode` holds the box properties common to View, the stacks, Spacer
//! and Divider, owns the node's `ExpansionController` once mounted, and turns
//! both into box-model declarations.

use crate::palette::PaletteSource;

use super::alignment::{MappingAxis, resolve};
use super::axis::Direction;
use super::context::{MountContext, RenderContext};
use super::expansion::{ExpansionController, ExpansionHandle, ExpansionState};
use super::length::{Edges, Length};
use super::style::StyleMap;

/// Width of diagnostic borders.
const DEBUG_BORDER_WIDTH: &str = "2px";

/// Box properties plus the node's expansion controller.
///
/// Not `Clone`: a controller belongs to exactly one node.
#[derive(Debug)]
pub struct LayoutNode {
    pub(crate) direction: Direction,
    pub(crate) spacing: Length,
    /// Cross-axis keyword (stack vocabulary or raw box-model keyword).
    pub(crate) alignment: String,
    /// Main-axis keyword (stack vocabulary or raw box-model keyword).
    pub(crate) distribution: String,
    pub(crate) margin: Edges,
    pub(crate) padding: Edges,
    pub(crate) min_size: Option<Length>,
    pub(crate) max_width: Option<f32>,
    pub(crate) max_height: Option<f32>,
    pub(crate) debug_border: bool,
    pub(crate) border: Option<String>,
    /// Overrides applied after everything else.
    pub(crate) style: StyleMap,
    controller: Option<ExpansionHandle>,
}

impl LayoutNode {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            spacing: Length::ZERO,
            alignment: "center".to_string(),
            distribution: "center".to_string(),
            margin: Edges::default(),
            padding: Edges::default(),
            min_size: None,
            max_width: None,
            max_height: None,
            debug_border: false,
            border: None,
            style: StyleMap::new(),
            controller: None,
        }
    }

    /// Create this node's controller, forwarding to `parent`.
    ///
    /// Re-attaching replaces the previous controller (and its flags).
    pub(crate) fn attach(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>) -> ExpansionHandle {
        let controller = ExpansionController::attach(parent);
        ctx.note_attached();
        self.controller = Some(controller.clone());
        controller
    }

    /// The node's controller, once mounted.
    pub fn controller(&self) -> Option<&ExpansionHandle> {
        self.controller.as_ref()
    }

    /// Current expansion state (`Idle` before mount).
    pub fn expansion(&self) -> ExpansionState {
        self.controller
            .as_ref()
            .map_or(ExpansionState::Idle, |c| c.state())
    }

    /// Render declarations: base box, then `extra`, then the node's overrides.
    pub(crate) fn render_style(&self, ctx: &mut RenderContext<'_>, extra: &StyleMap) -> StyleMap {
        let state = self.expansion();
        let mut style = StyleMap::new();

        style.set("display", "flex");
        style.set("flex-direction", self.direction.keyword());
        style.set("gap", self.spacing.to_css());
        style.set("align-items", resolve(MappingAxis::Cross, &self.alignment));
        style.set("justify-content", resolve(MappingAxis::Main, &self.distribution));
        style.set("width", if state.expands_horizontally() { "100%" } else { "auto" });
        style.set("height", if state.expands_vertically() { "100%" } else { "auto" });

        let min_size = self.min_size.as_ref().map(Length::to_css);
        let (min_width, min_height) = match self.direction {
            Direction::Row => (min_size, None),
            Direction::Column => (None, min_size),
        };
        style.set("min-width", min_width.unwrap_or_else(|| "auto".to_string()));
        style.set("min-height", min_height.unwrap_or_else(|| "auto".to_string()));
        style.set("max-width", px_or_none(self.max_width));
        style.set("max-height", px_or_none(self.max_height));

        self.margin.declare("margin", &mut style);
        self.padding.declare("padding", &mut style);
        style.set("box-sizing", "border-box");
        style.set(
            "border",
            self.border_declaration(&mut *ctx.palette, ctx.force_debug_borders),
        );

        style.merge(extra);
        style.merge(&self.style);
        style
    }

    /// Explicit border wins; otherwise a palette-colored debug border, or none.
    fn border_declaration(&self, palette: &mut dyn PaletteSource, force_debug: bool) -> String {
        if let Some(border) = &self.border {
            return border.clone();
        }
        if self.debug_border || force_debug {
            return format!("{} solid {}", DEBUG_BORDER_WIDTH, palette.next_color());
        }
        "none".to_string()
    }
}

/// A zero (or NaN) bound means unbounded.
fn px_or_none(bound: Option<f32>) -> String {
    match bound {
        Some(px) if px != 0.0 && !px.is_nan() => format!("{}px", px),
        _ => "none".to_string(),
    }
}

/// Builder methods shared by every type wrapping a `LayoutNode` in `self.node`.
macro_rules! node_builder_methods {
    () => {
        /// Set margin on each edge.
        pub fn margin(mut self, margin: $crate::layout::length::Edges) -> Self {
            self.node.margin = margin;
            self
        }

        /// Set padding on each edge.
        pub fn padding(mut self, padding: $crate::layout::length::Edges) -> Self {
            self.node.padding = padding;
            self
        }

        /// Upper bound on width, in pixels.
        pub fn max_width(mut self, px: f32) -> Self {
            self.node.max_width = Some(px);
            self
        }

        /// Upper bound on height, in pixels.
        pub fn max_height(mut self, px: f32) -> Self {
            self.node.max_height = Some(px);
            self
        }

        /// Draw a palette-colored diagnostic border.
        pub fn debug_border(mut self, enabled: bool) -> Self {
            self.node.debug_border = enabled;
            self
        }

        /// Explicit border declaration (takes precedence over `debug_border`).
        pub fn border(mut self, border: impl Into<String>) -> Self {
            self.node.border = Some(border.into());
            self
        }

        /// Override a single declaration. Overrides are applied last.
        pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
            self.node.style.set(property, value);
            self
        }

        /// Merge a set of overrides.
        pub fn styles(mut self, overrides: &$crate::layout::style::StyleMap) -> Self {
            self.node.style.merge(overrides);
            self
        }

        /// Expansion state of this node (`Idle` before mount).
        pub fn expansion(&self) -> $crate::layout::expansion::ExpansionState {
            self.node.expansion()
        }

        /// This node's controller, once mounted.
        pub fn controller(&self) -> Option<&$crate::layout::expansion::ExpansionHandle> {
            self.node.controller()
        }
    };
}

/// Alignment, distribution, spacing and min-size builders for flex containers.
macro_rules! flex_builder_methods {
    () => {
        /// Cross-axis alignment.
        pub fn alignment(mut self, alignment: $crate::layout::alignment::Alignment) -> Self {
            self.node.alignment = alignment.keyword().to_string();
            self
        }

        /// Cross-axis alignment from a keyword; unknown keywords pass through.
        pub fn alignment_keyword(mut self, keyword: impl Into<String>) -> Self {
            self.node.alignment = keyword.into();
            self
        }

        /// Main-axis distribution.
        pub fn distribution(mut self, distribution: $crate::layout::alignment::Distribution) -> Self {
            self.node.distribution = distribution.keyword().to_string();
            self
        }

        /// Main-axis distribution from a keyword; unknown keywords pass through.
        pub fn distribution_keyword(mut self, keyword: impl Into<String>) -> Self {
            self.node.distribution = keyword.into();
            self
        }

        /// Gap between children.
        pub fn spacing(mut self, spacing: impl Into<$crate::layout::length::Length>) -> Self {
            self.node.spacing = spacing.into();
            self
        }

        /// Minimum size along the container's direction.
        pub fn min_size(mut self, min_size: impl Into<$crate::layout::length::Length>) -> Self {
            self.node.min_size = Some(min_size.into());
            self
        }
    };
}

pub(crate) use {flex_builder_methods, node_builder_methods};
