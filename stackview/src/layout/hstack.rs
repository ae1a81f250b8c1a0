//! HStack - a row-direction stack.
//!
//! Children are laid out left to right and mount with the row axis, so a
//! `Spacer` inside an HStack expands horizontally.

use super::axis::{Axis, Direction};
use super::base::{LayoutNode, flex_builder_methods, node_builder_methods};
use super::child::{Element, mount_children, render_children};
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug)]
pub struct HStack {
    node: LayoutNode,
    pub(crate) children: Vec<Element>,
}

impl HStack {
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Row),
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
        mount_children(&mut self.children, ctx, Some(&controller), Axis::Row);
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let style = self.node.render_style(ctx, &StyleMap::new());
        BoxNode::new(BoxKind::HStack, style).with_children(render_children(&self.children, ctx))
    }
}

impl Default for HStack {
    fn default() -> Self {
        Self::new()
    }
}
