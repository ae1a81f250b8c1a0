//! ZStack - children stacked along the depth axis.
//!
//! Every child is wrapped in its own positioning layer. The first layer stays
//! in normal flow and anchors the stack's intrinsic size; later layers are
//! absolutely positioned over it, painting in source order.
//!
//! Children mount with the `z` axis, so a direct `Spacer` child does nothing.
//! Expansion requests from nested stacks still pass through the layers.

use super::alignment::{Alignment, MappingAxis, resolve};
use super::axis::{Axis, Direction};
use super::base::{LayoutNode, node_builder_methods};
use super::child::Element;
use super::context::{MountContext, RenderContext};
use super::expansion::ExpansionHandle;
use super::style::{BoxKind, BoxNode, StyleMap};

#[derive(Debug)]
pub struct ZStack {
    node: LayoutNode,
    pub(crate) children: Vec<Element>,
    /// One positioning node per child, index-aligned with `children`.
    layers: Vec<LayoutNode>,
}

impl ZStack {
    pub fn new() -> Self {
        Self {
            node: LayoutNode::new(Direction::Column),
            children: Vec::new(),
            layers: Vec::new(),
        }
    }

    node_builder_methods!();

    /// Alignment of the layers within the stack, on both axes.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.node.alignment = alignment.keyword().to_string();
        self
    }

    /// Alignment from a keyword; unknown keywords pass through.
    pub fn alignment_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.node.alignment = keyword.into();
        self
    }

    pub fn push(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self.layers.push(LayoutNode::new(Direction::Column));
        self
    }

    pub fn extend<E: Into<Element>>(mut self, children: impl IntoIterator<Item = E>) -> Self {
        for child in children {
            self = self.push(child);
        }
        self
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Element> {
        if index >= self.children.len() {
            return None;
        }
        self.layers.remove(index);
        Some(self.children.remove(index))
    }

    pub(crate) fn mount(&mut self, ctx: &mut MountContext<'_>, parent: Option<&ExpansionHandle>) {
        let controller = self.node.attach(ctx, parent);
        let pairs = self.children.iter_mut().zip(self.layers.iter_mut());
        for (index, (child, layer)) in pairs.enumerate() {
            ctx.enter(index);
            let layer_controller = layer.attach(ctx, Some(&controller));
            child.mount(ctx, Some(&layer_controller), Axis::Z);
            ctx.exit();
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let aligned = resolve(MappingAxis::Cross, &self.node.alignment);
        let container = StyleMap::new()
            .with("position", "relative")
            .with("display", "flex")
            .with("align-items", aligned)
            .with("justify-content", aligned);
        let style = self.node.render_style(ctx, &container);

        let layers = self
            .children
            .iter()
            .zip(&self.layers)
            .enumerate()
            .map(|(index, (child, layer))| {
                let layer_style = layer.render_style(ctx, &layer_position(index));
                BoxNode::new(BoxKind::ZLayer { index }, layer_style).with_children(vec![child.render(ctx)])
            })
            .collect();

        BoxNode::new(BoxKind::ZStack, style).with_children(layers)
    }
}

impl Default for ZStack {
    fn default() -> Self {
        Self::new()
    }
}

/// The first layer anchors the stack; the rest overlay it.
fn layer_position(index: usize) -> StyleMap {
    let position = if index == 0 { "relative" } else { "absolute" };
    StyleMap::new()
        .with("position", position)
        .with("top", "0")
        .with("left", "0")
        .with("right", "0")
        .with("bottom", "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::child::Leaf;
    use crate::layout::context::EffectQueue;
    use crate::layout::expansion::{ExpansionController, ExpansionState};
    use crate::layout::spacer::Spacer;
    use crate::palette::CyclingPalette;
    use crate::theme::Theme;

    fn render(stack: &ZStack) -> BoxNode {
        let theme = Theme::light();
        let mut palette = CyclingPalette::new();
        let mut ctx = RenderContext::new(&theme, &mut palette);
        stack.render(&mut ctx)
    }

    #[test]
    fn test_first_layer_anchors_rest_overlay() {
        let stack = ZStack::new()
            .push(Leaf::new("a"))
            .push(Leaf::new("b"))
            .push(Leaf::new("c"));
        let node = render(&stack);

        assert_eq!(node.style("position"), Some("relative"));
        assert_eq!(node.children.len(), 3);
        let positions: Vec<_> = node.children.iter().map(|l| l.style("position")).collect();
        assert_eq!(positions, vec![Some("relative"), Some("absolute"), Some("absolute")]);
        for (index, layer) in node.children.iter().enumerate() {
            assert_eq!(layer.kind, BoxKind::ZLayer { index });
            assert_eq!(layer.style("top"), Some("0"));
            assert_eq!(layer.style("bottom"), Some("0"));
        }
        assert!(node.at(&[2, 0]).unwrap().find_leaf("c").is_some());
    }

    #[test]
    fn test_alignment_applies_to_both_axes() {
        let node = render(&ZStack::new().alignment(Alignment::Top));
        assert_eq!(node.style("align-items"), Some("flex-start"));
        assert_eq!(node.style("justify-content"), Some("flex-start"));

        let node = render(&ZStack::new().alignment_keyword("baseline"));
        assert_eq!(node.style("justify-content"), Some("baseline"));
    }

    #[test]
    fn test_direct_spacer_is_ignored() {
        let root = ExpansionController::root();
        let mut queue = EffectQueue::new();
        let mut ctx = MountContext::new(&mut queue);

        let mut stack = ZStack::new().push(Leaf::new("a")).push(Spacer::new());
        stack.mount(&mut ctx, Some(&root));
        // Stack, two layers, one spacer.
        assert_eq!(ctx.attached(), 4);
        assert!(queue.is_empty());
        assert_eq!(root.state(), ExpansionState::Idle);
    }

    #[test]
    fn test_remove_keeps_layers_aligned() {
        let mut stack = ZStack::new().push(Leaf::new("a")).push(Leaf::new("b"));
        let removed = stack.remove(0).unwrap();
        assert_eq!(removed.name(), "Leaf");

        let node = render(&stack);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].style("position"), Some("relative"));
        assert!(stack.remove(5).is_none());
    }
}
