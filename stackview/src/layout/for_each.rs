//! ForEach - build one element per data item.
//!
//! The helper renders as a `display: contents` box, so its children take
//! part in the enclosing container's layout directly. For the same reason it
//! has no layout node: children mount against the enclosing node and axis.
//!
//! ```ignore
//! let list = ForEach::builder()
//!     .data(vec!["a", "b"])
//!     .view_builder(|item, _| Leaf::new(*item).into())
//!     .build()?;
//! ```

use serde::Serialize;

use crate::error::LayoutError;

use super::child::Element;
use super::context::RenderContext;
use super::style::{BoxKind, BoxNode, StyleMap};

/// FNV-1a prime for hash mixing.
const FNV_PRIME: u64 = 0x100000001b3;
/// FNV-1a offset basis.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;

#[derive(Debug)]
pub struct ForEach {
    children: Vec<Element>,
    /// Render key per child, index-aligned with `children`.
    keys: Vec<u64>,
    style: StyleMap,
}

impl ForEach {
    pub fn builder<'f, T: Serialize>() -> ForEachBuilder<'f, T> {
        ForEachBuilder {
            data: None,
            view_builder: None,
            style: StyleMap::new(),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Element> {
        if index >= self.children.len() {
            return None;
        }
        self.keys.remove(index);
        Some(self.children.remove(index))
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> BoxNode {
        let mut style = StyleMap::new().with("display", "contents");
        style.merge(&self.style);

        let children = self
            .children
            .iter()
            .zip(&self.keys)
            .map(|(child, &key)| {
                let mut node = child.render(ctx);
                node.key = Some(key);
                node
            })
            .collect();
        BoxNode::new(BoxKind::ForEach, style).with_children(children)
    }
}

type ViewBuilder<'f, T> = Box<dyn FnMut(&T, usize) -> Element + 'f>;

pub struct ForEachBuilder<'f, T> {
    data: Option<Vec<T>>,
    view_builder: Option<ViewBuilder<'f, T>>,
    style: StyleMap,
}

impl<'f, T: Serialize> ForEachBuilder<'f, T> {
    pub fn data(mut self, data: impl IntoIterator<Item = T>) -> Self {
        self.data = Some(data.into_iter().collect());
        self
    }

    /// Builds the element for `(item, index)`.
    pub fn view_builder(mut self, f: impl FnMut(&T, usize) -> Element + 'f) -> Self {
        self.view_builder = Some(Box::new(f));
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn build(self) -> Result<ForEach, LayoutError> {
        let data = self.data.ok_or(LayoutError::MissingInput("data"))?;
        let mut view_builder = self
            .view_builder
            .ok_or(LayoutError::MissingInput("view_builder"))?;

        let mut children = Vec::with_capacity(data.len());
        let mut keys = Vec::with_capacity(data.len());
        for (index, item) in data.iter().enumerate() {
            keys.push(item_key(item, index)?);
            children.push(view_builder(item, index));
        }
        tracing::trace!(items = children.len(), "built list");

        Ok(ForEach {
            children,
            keys,
            style: self.style,
        })
    }
}

/// Render key for `item` at `index`: FNV-1a over the item's JSON, mixed with the index.
pub fn item_key<T: Serialize + ?Sized>(item: &T, index: usize) -> Result<u64, LayoutError> {
    let bytes = serde_json::to_vec(item)?;
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^= index as u64;
    Ok(hash.wrapping_mul(FNV_PRIME))
}
