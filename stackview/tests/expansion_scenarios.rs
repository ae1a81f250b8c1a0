//! Integration tests for expansion propagation through whole trees.
//!
//! Each test builds a tree, drives it through a `Surface` (mount, commit,
//! render) and inspects either the controllers or the rendered box tree.
//!
//! Set `RUST_LOG=stackview=trace` to see every queued request and upward walk.

use stackview::{
    Alignment, BoxKind, BoxNode, CyclingPalette, Divider, Element, ExpansionState, ForEach, HStack, Leaf,
    LayoutError, RenderConfig, Spacer, Surface, VStack, View, ZStack,
};
use stackview::layout::item_key;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test harness wrapping a surface with a deterministic palette.
struct Scenario {
    surface: Surface,
}

impl Scenario {
    fn new(root: impl Into<Element>) -> Self {
        init_tracing();
        Self {
            surface: Surface::new(root).with_palette(CyclingPalette::new()),
        }
    }

    fn render(&mut self) -> BoxNode {
        self.surface.render()
    }

    /// Expect the controller at `path` to be in `expected`.
    fn expect_state(&self, path: &[usize], expected: ExpansionState) {
        let controller = self
            .surface
            .controller_at(path)
            .unwrap_or_else(|| panic!("no controller at {:?}", path));
        assert_eq!(controller.state(), expected, "path: {:?}", path);
    }
}

// =========================================================================
// End-to-end scenarios
// =========================================================================

#[test]
fn test_spacer_in_hstack_fills_row() {
    let mut t = Scenario::new(
        VStack::new().push(
            HStack::new()
                .push(Leaf::new("a"))
                .push(Spacer::new())
                .push(Leaf::new("b")),
        ),
    );
    let tree = t.render();

    t.expect_state(&[0], ExpansionState::ExpandRow);
    t.expect_state(&[], ExpansionState::ExpandRow);
    // The spacer's own node never expands.
    t.expect_state(&[0, 1], ExpansionState::Idle);

    let row = tree.at(&[0]).unwrap();
    assert_eq!(row.kind, BoxKind::HStack);
    assert!(row.fills_width());
    assert!(!row.fills_height());
    assert!(tree.fills_width());
    assert_eq!(tree.at(&[0, 1]).unwrap().style("flex-grow"), Some("1"));
}

#[test]
fn test_vstack_of_leaves_sizes_to_content() {
    let mut t = Scenario::new(VStack::new().push(Leaf::new("a")).push(Leaf::new("b")));
    let tree = t.render();

    t.expect_state(&[], ExpansionState::Idle);
    assert_eq!(tree.style("width"), Some("auto"));
    assert_eq!(tree.style("height"), Some("auto"));
}

#[test]
fn test_zstack_layers_in_source_order() {
    let mut t = Scenario::new(
        ZStack::new()
            .push(Leaf::new("A"))
            .push(Leaf::new("B"))
            .push(Leaf::new("C")),
    );
    let tree = t.render();

    assert_eq!(tree.kind, BoxKind::ZStack);
    let labels: Vec<_> = tree
        .children
        .iter()
        .map(|layer| match &layer.children[0].kind {
            BoxKind::Leaf { label } => label.as_str(),
            other => panic!("expected leaf, got {:?}", other),
        })
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(tree.children[0].style("position"), Some("relative"));
    assert_eq!(tree.children[1].style("position"), Some("absolute"));
    assert_eq!(tree.children[2].style("position"), Some("absolute"));
}

// =========================================================================
// Axis semantics
// =========================================================================

#[test]
fn test_spacer_directly_in_zstack_does_nothing() {
    let mut t = Scenario::new(VStack::new().push(ZStack::new().push(Leaf::new("a")).push(Spacer::new())));
    t.render();

    t.expect_state(&[], ExpansionState::Idle);
    t.expect_state(&[0], ExpansionState::Idle);
}

#[test]
fn test_stack_inside_zstack_still_propagates() {
    let mut t = Scenario::new(
        VStack::new().push(ZStack::new().push(VStack::new().push(Leaf::new("a")).push(Spacer::new()))),
    );
    let tree = t.render();

    t.expect_state(&[0, 0], ExpansionState::ExpandColumn);
    t.expect_state(&[0], ExpansionState::ExpandColumn);
    t.expect_state(&[], ExpansionState::ExpandColumn);
    // The layer wrapping the inner VStack fills as well.
    assert!(tree.at(&[0, 0]).unwrap().fills_height());
}

#[test]
fn test_both_axes_reach_common_ancestor() {
    let mut t = Scenario::new(
        View::new()
            .push(HStack::new().push(Spacer::new()))
            .push(VStack::new().push(Spacer::new())),
    );
    let tree = t.render();

    t.expect_state(&[0], ExpansionState::ExpandRow);
    t.expect_state(&[1], ExpansionState::ExpandColumn);
    t.expect_state(&[], ExpansionState::ExpandBoth);
    assert!(tree.fills_width() && tree.fills_height());
}

#[test]
fn test_root_spacer_uses_column_axis() {
    let mut t = Scenario::new(Spacer::new().min_size(10.0));
    let tree = t.render();

    assert_eq!(tree.style("min-height"), Some("10px"));
    assert_eq!(tree.style("min-width"), Some("auto"));
    assert_eq!(t.surface.pending_effects(), 0);
}

#[test]
fn test_deep_nesting_converges_in_one_pass() {
    let mut inner: Element = HStack::new().push(Spacer::new()).into();
    for _ in 0..6 {
        inner = View::new().push(inner).into();
    }
    let mut t = Scenario::new(inner);
    t.render();

    let mut path = Vec::new();
    for _ in 0..=6 {
        t.expect_state(&path, ExpansionState::ExpandRow);
        path.push(0);
    }
}

#[test]
fn test_repeat_render_is_stable() {
    let mut t = Scenario::new(HStack::new().push(Spacer::new()));
    let first = t.render();
    let second = t.render();

    assert_eq!(first.style("width"), second.style("width"));
    t.expect_state(&[], ExpansionState::ExpandRow);
}

// =========================================================================
// Unmount cancellation
// =========================================================================

#[test]
fn test_unmounted_spacer_never_expands() {
    let mut t = Scenario::new(VStack::new().push(HStack::new().push(Leaf::new("a")).push(Spacer::new())));
    t.surface.mount();
    assert_eq!(t.surface.pending_effects(), 1);

    t.surface.unmount(&[0, 1]).unwrap();
    let stats = t.surface.commit();
    assert_eq!((stats.applied, stats.dropped), (0, 1));

    t.expect_state(&[0], ExpansionState::Idle);
    t.expect_state(&[], ExpansionState::Idle);
    assert!(!t.render().fills_width());
}

#[test]
fn test_unmounted_container_drops_its_spacers() {
    let mut t = Scenario::new(
        View::new()
            .push(HStack::new().push(Spacer::new()))
            .push(VStack::new().push(Spacer::new())),
    );
    t.surface.mount();
    t.surface.unmount(&[0]).unwrap();
    t.surface.commit();

    // Only the column request survives.
    t.expect_state(&[], ExpansionState::ExpandColumn);
    t.expect_state(&[0], ExpansionState::ExpandColumn);
}

#[test]
fn test_unmount_bad_path() {
    let mut t = Scenario::new(VStack::new());
    let err = t.surface.unmount(&[0, 2]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidPath(ref p) if p == &[0, 2]));
    assert_eq!(err.to_string(), "no element at path [0, 2]");
}

// =========================================================================
// Rendering details
// =========================================================================

#[test]
fn test_debug_borders_cycle_palette() {
    let mut t = Scenario::new(
        VStack::new()
            .debug_border(true)
            .push(HStack::new().debug_border(true))
            .push(HStack::new().border("1px solid black").debug_border(true)),
    );
    let tree = t.render();

    assert_eq!(tree.style("border"), Some("2px solid red"));
    assert_eq!(tree.children[0].style("border"), Some("2px solid orange"));
    assert_eq!(tree.children[1].style("border"), Some("1px solid black"));
}

#[test]
fn test_seeded_config_is_reproducible() {
    let config = RenderConfig::from_json(r#"{"palette":{"mode":"seeded","seed":42},"debug_borders":true}"#).unwrap();
    let build = || VStack::new().push(VStack::new()).push(VStack::new());

    let a = Surface::with_config(build(), config.clone()).render();
    let b = Surface::with_config(build(), config).render();
    assert_eq!(a, b);
}

#[test]
fn test_divider_follows_color_scheme() {
    let mut surface = Surface::new(VStack::new().push(Divider::new()));
    let light = surface.render();
    assert_eq!(light.children[0].style("background-color"), Some("rgba(0, 0, 0, 0.1)"));

    surface.environment_mut().toggle_theme();
    let dark = surface.render();
    assert_eq!(dark.children[0].style("background-color"), Some("rgba(255, 255, 255, 0.1)"));
}

#[test]
fn test_for_each_children_join_enclosing_stack() {
    let items = vec!["one", "two"];
    let list = ForEach::builder()
        .data(items.clone())
        .view_builder(|item, _| HStack::new().push(Leaf::new(*item)).push(Spacer::new()).into())
        .build()
        .unwrap();
    let mut t = Scenario::new(VStack::new().alignment(Alignment::Stretch).push(list));
    let tree = t.render();

    // ForEach has no node of its own: list rows forward to the VStack.
    t.expect_state(&[], ExpansionState::ExpandRow);
    t.expect_state(&[0, 1], ExpansionState::ExpandRow);

    let list = tree.at(&[0]).unwrap();
    assert_eq!(list.style("display"), Some("contents"));
    assert_eq!(list.children[1].key, Some(item_key(&"two", 1).unwrap()));
    assert_eq!(tree.style("align-items"), Some("stretch"));
}

#[test]
fn test_render_tree_serializes() {
    let mut t = Scenario::new(HStack::new().push(Leaf::new("a")));
    let json = t.render().to_json().unwrap();

    assert!(json.starts_with(r#"{"kind":{"type":"h_stack"}"#));
    assert!(json.contains(r#""flex-direction":"row""#));
    assert!(json.contains(r#"{"type":"leaf","label":"a"}"#));
}
