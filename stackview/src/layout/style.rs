//! Box-model style declarations and the rendered box tree.
//!
//! Rendering produces a `BoxNode` tree: one node per box, each carrying an
//! ordered `StyleMap` of box-model declarations (`display: flex`,
//! `width: 100%`, ...). Pixel layout is left to whatever consumes the tree.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered property -> value declarations. Later writes replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing any existing value for `property`.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Apply `overrides` on top of these declarations.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (property, value) in overrides.iter() {
            self.set(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = StyleMap::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

/// What produced a rendered box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoxKind {
    View,
    HStack,
    VStack,
    ZStack,
    /// Positioning box wrapping the `index`-th child of a ZStack.
    ZLayer { index: usize },
    Spacer,
    Divider,
    ForEach,
    Leaf { label: String },
}

/// A rendered box: declarations plus children in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxNode {
    pub kind: BoxKind,
    /// Render identity assigned by a list helper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<u64>,
    pub style: StyleMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BoxNode>,
}

impl BoxNode {
    pub fn new(kind: BoxKind, style: StyleMap) -> Self {
        Self {
            kind,
            key: None,
            style,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<BoxNode>) -> Self {
        self.children = children;
        self
    }

    /// Shorthand for `self.style.get(property)`.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property)
    }

    /// Follow child indices from this node.
    pub fn at(&self, path: &[usize]) -> Option<&BoxNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Depth-first search (pre-order) for the first leaf with `label`.
    pub fn find_leaf(&self, label: &str) -> Option<&BoxNode> {
        if let BoxKind::Leaf { label: own } = &self.kind {
            if own == label {
                return Some(self);
            }
        }
        self.children.iter().find_map(|child| child.find_leaf(label))
    }

    /// Whether this box fills available width.
    pub fn fills_width(&self) -> bool {
        self.style("width") == Some("100%")
    }

    /// Whether this box fills available height.
    pub fn fills_height(&self) -> bool {
        self.style("height") == Some("100%")
    }

    /// Serialize the tree for a host renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
