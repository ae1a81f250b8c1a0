//! View - the generic flex container.
//!
//! A View has its own layout node but does not define a stack axis: its
//! children see whatever axis the nearest enclosing stack established.

use super::axis::{Axis, Direction};
use super::base::{LayoutNode, flex_builder_methods, node_builder_methods};
use super::child::{Element, mount_children, render_children};
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug)]
pub struct View {
    node: LayoutNode,
    pub(crate) children: Vec<Element>,
}

impl View {
    /// A column-direction view with no children.
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Column),
            children: Vec::new(),
        }
    }

    /// Flex direction of the box. Does not change the axis seen by children.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.node.direction = direction;
        self
    }

    node_builder_methods!();
    flex_builder_methods!();

    pub fn push(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn extend<E: Into<Element>>(mut self, children: impl IntoIterator<Item = E>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>, axis: Axis) {
        let controller = self.node.attach(ctx, parent);
        mount_children(&mut self.children, ctx, Some(&controller), axis);
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let style = self.node.render_style(ctx, &StyleMap::new());
        BoxNode::new(BoxKind::View, style).with_children(render_children(&self.children, ctx))
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
