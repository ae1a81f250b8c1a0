//! Spacer - flexible space that pushes its siblings apart.
//!
//! On mount a spacer asks the enclosing layout node to fill along the
//! nearest stack's axis. The request is queued and runs on commit, after
//! the whole tree has been attached.

use super::axis::{Axis, Direction};
use super::base::{LayoutNode, node_builder_methods};
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::length::Length;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug)]
pub struct Spacer {
    node: LayoutNode,
    min_size: Length,
    /// Stack axis seen at the last mount.
    axis: Axis,
}

impl Spacer {
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Column),
            min_size: Length::ZERO,
            axis: Axis::default(),
        }
    }

    /// Minimum extent along the stack axis.
    pub fn min_size(mut self, min_size: impl Into<Length>) -> Self {
        self.min_size = min_size.into();
        self
    }

    node_builder_methods!();

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>, axis: Axis) {
        self.axis = axis;
        self.node.direction = Direction::along(axis);
        let own = self.node.attach(ctx, parent);

        if !axis.is_propagating() {
            tracing::trace!(path = ?ctx.path(), "spacer in z stack, no expansion");
            return;
        }
        match parent {
            Some(target) => ctx.queue_expansion(&own, target, axis),
            None => tracing::trace!("spacer at root, nothing to expand"),
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let min_size = self.min_size.to_css();
        let (min_width, min_height) = match self.axis {
            Axis::Row => (min_size.as_str(), "auto"),
            Axis::Column => ("auto", min_size.as_str()),
            Axis::Z => ("auto", "auto"),
        };
        let flex = StyleMap::new()
            .with("flex-grow", "1")
            .with("flex-shrink", "1")
            .with("flex-basis", "0")
            .with("min-width", min_width)
            .with("min-height", min_height);
        BoxNode::new(BoxKind::Spacer, self.node.render_style(ctx, &flex))
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}
