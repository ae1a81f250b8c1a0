//! Element Enum - Central Switchboard
//!
//! `Element` is anything that can be placed in a container. Containers hold
//! `Vec<Element>` and dispatch mount/render through it without knowing the
//! concrete child type.
//!
//! Recursive containers are boxed to break the size recursion.

use super::axis::Axis;
use super::context::{MountContext, RenderContext};
use super::divider::Divider;
use super::expansion::ExpansionHandle;
use super::for_each::ForEach;
use super::hstack::HStack;
use super::spacer::Spacer;
use super::style::{BoxKind, BoxNode, StyleMap};
use super::view::View;
use super::vstack::VStack;
use super::zstack::ZStack;

/// A node in the declarative tree.
#[derive(Debug)]
pub enum Element {
    View(Box<View>),
    HStack(Box<HStack>),
    VStack(Box<VStack>),
    ZStack(Box<ZStack>),
    Spacer(Spacer),
    Divider(Divider),
    ForEach(ForEach),
    Leaf(Leaf),
}

impl Element {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Element::View(_) => "View",
            Element::HStack(_) => "HStack",
            Element::VStack(_) => "VStack",
            Element::ZStack(_) => "ZStack",
            Element::Spacer(_) => "Spacer",
            Element::Divider(_) => "Divider",
            Element::ForEach(_) => "ForEach",
            Element::Leaf(_) => "Leaf",
        }
    }

    /// Attach controllers for this subtree and queue its spacer effects.
    ///
    /// `parent` is the controller of the nearest enclosing layout node and
    /// `axis` the axis of the nearest enclosing stack.
    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>, axis: Axis) {
        match self {
            Element::View(v) => v.mount(ctx, parent, axis),
            Element::HStack(s) => s.mount(ctx, parent),
            Element::VStack(s) => s.mount(ctx, parent),
            Element::ZStack(s) => s.mount(ctx, parent),
            Element::Spacer(s) => s.mount(ctx, parent, axis),
            Element::Divider(d) => d.mount(ctx, parent),
            // Transparent: children see the same node and axis.
            Element::ForEach(f) => mount_children(f.children_mut(), ctx, parent, axis),
            Element::Leaf(_) => {}
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        match self {
            Element::View(v) => v.render(ctx),
            Element::HStack(s) => s.render(ctx),
            Element::VStack(s) => s.render(ctx),
            Element::ZStack(s) => s.render(ctx),
            Element::Spacer(s) => s.render(ctx),
            Element::Divider(d) => d.render(ctx),
            Element::ForEach(f) => f.render(ctx),
            Element::Leaf(l) => l.render(),
        }
    }

    /// The controller of this element's layout node, if it has one and is mounted.
    pub fn controller(&self) -> Option<&ExpansionHandle> {
        match self {
            Element::View(v) => v.controller(),
            Element::HStack(s) => s.controller(),
            Element::VStack(s) => s.controller(),
            Element::ZStack(s) => s.controller(),
            Element::Spacer(s) => s.controller(),
            Element::Divider(d) => d.controller(),
            Element::ForEach(_) | Element::Leaf(_) => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::View(v) => &v.children,
            Element::HStack(s) => &s.children,
            Element::VStack(s) => &s.children,
            Element::ZStack(s) => &s.children,
            Element::ForEach(f) => f.children(),
            Element::Spacer(_) | Element::Divider(_) | Element::Leaf(_) => &[],
        }
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        match self {
            Element::View(v) => v.children.get_mut(index),
            Element::HStack(s) => s.children.get_mut(index),
            Element::VStack(s) => s.children.get_mut(index),
            Element::ZStack(s) => s.children.get_mut(index),
            Element::ForEach(f) => f.children_mut().get_mut(index),
            Element::Spacer(_) | Element::Divider(_) | Element::Leaf(_) => None,
        }
    }

    /// Detach and return the `index`-th child, with any per-child bookkeeping.
    pub(crate) fn remove_child(&mut self, index: usize) -> Option<Element> {
        fn take(children: &mut Vec<Element>, index: usize) -> Option<Element> {
            (index < children.len()).then(|| children.remove(index))
        }
        match self {
            Element::View(v) => take(&mut v.children, index),
            Element::HStack(s) => take(&mut s.children, index),
            Element::VStack(s) => take(&mut s.children, index),
            Element::ZStack(s) => s.remove(index),
            Element::ForEach(f) => f.remove(index),
            Element::Spacer(_) | Element::Divider(_) | Element::Leaf(_) => None,
        }
    }
}

/// Mount `children` under the same enclosing node and axis.
pub(crate) fn mount_children(
    children: &mut [Element],
    ctx: &mut MountContext<'_>,
    parent: Option<&ExpansionHandle>,
    axis: Axis,
) {
    for (index, child) in children.iter_mut().enumerate() {
        ctx.enter(index);
        child.mount(ctx, parent, axis);
        ctx.exit();
    }
}

pub(crate) fn render_children(children: &[Element], ctx: &mut RenderContext<'_>) -> Vec<BoxNode> {
    children.iter().map(|child| child.render(ctx)).collect()
}

// =========================================================================
// Leaf
// =========================================================================

/// Opaque host content (text, image, ...) identified by a label.
///
/// Leaves have no layout node and never take part in expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    label: String,
    style: StyleMap,
}

impl Leaf {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: StyleMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    fn render(&self) -> BoxNode {
        BoxNode::new(
            BoxKind::Leaf {
                label: self.label.clone(),
            },
            self.style.clone(),
        )
    }
}

// =========================================================================
// Conversions
// =========================================================================

impl From<View> for Element {
    fn from(view: View) -> Self {
        Element::View(Box::new(view))
    }
}

impl From<HStack> for Element {
    fn from(stack: HStack) -> Self {
        Element::HStack(Box::new(stack))
    }
}

impl From<VStack> for Element {
    fn from(stack: VStack) -> Self {
        Element::VStack(Box::new(stack))
    }
}

impl From<ZStack> for Element {
    fn from(stack: ZStack) -> Self {
        Element::ZStack(Box::new(stack))
    }
}

impl From<Spacer> for Element {
    fn from(spacer: Spacer) -> Self {
        Element::Spacer(spacer)
    }
}

impl From<Divider> for Element {
    fn from(divider: Divider) -> Self {
        Element::Divider(divider)
    }
}

impl From<ForEach> for Element {
    fn from(for_each: ForEach) -> Self {
        Element::ForEach(for_each)
    }
}

impl From<Leaf> for Element {
    fn from(leaf: Leaf) -> Self {
        Element::Leaf(leaf)
    }
}
