//! Layout primitives and the expansion protocol.
//!
//! Containers wrap a `LayoutNode` whose size on each axis is either
//! content-sized or fill-available. A `Spacer` deep in the tree flips its
//! enclosing nodes to fill along the nearest stack's axis.
//!
//! # Architecture
//!
//! ```text
//! mount (attach controllers, queue spacer effects) -> commit (upward walks) -> render (BoxNode tree)
//! ```

pub mod alignment;
pub mod axis;
pub mod context;
pub mod expansion;
pub mod length;
pub mod style;

// base defines the builder macros used by the containers below
pub mod base;
pub mod child;
pub mod divider;
pub mod for_each;
pub mod hstack;
pub mod spacer;
pub mod view;
pub mod vstack;
pub mod zstack;

// Re-export core types
pub use alignment::{Alignment, Distribution, MappingAxis, resolve};
pub use axis::{Axis, Direction};
pub use context::{EffectQueue, FlushStats, MountContext, RenderContext};
pub use expansion::{ExpansionController, ExpansionHandle, ExpansionState};
pub use length::{Edges, Length};
pub use style::{BoxKind, BoxNode, StyleMap};

// Re-export elements
pub use base::LayoutNode;
pub use child::{Element, Leaf};
pub use divider::{Divider, Orientation};
pub use for_each::{ForEach, ForEachBuilder, item_key};
pub use hstack::HStack;
pub use spacer::Spacer;
pub use view::View;
pub use vstack::VStack;
pub use zstack::ZStack;
