//! VStack - a column-direction stack.
//!
//! Children are laid out top to bottom and mount with the column axis, so a
//! `Spacer` inside a VStack expands vertically.

use super::axis::{Axis, Direction};
use super::base::{LayoutNode, flex_builder_methods, node_builder_methods};
use super::child::{Element, mount_children, render_children};
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug)]
pub struct VStack {
    node: LayoutNode,
    pub(crate) children: Vec<Element>,
}

impl VStack {
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Column),
            children: Vec::new(),
        }
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

    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>) {
        let controller = self.node.attach(ctx, parent);
        mount_children(&mut self.children, ctx, Some(&controller), Axis::Column);
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let style = self.node.render_style(ctx, &StyleMap::new());
        BoxNode::new(BoxKind::VStack, style).with_children(render_children(&self.children, ctx))
    }
}

impl Default for VStack {
    fn default() -> Self {
        Self::new()
    }
}
