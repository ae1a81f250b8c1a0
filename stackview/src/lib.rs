//! Stackview: declarative stack layout with expansion propagation.
//!
//! Containers (`View`, `HStack`, `VStack`, `ZStack`) build a tree that a
//! `Surface` turns into box-model declarations. Every container starts out
//! sized to its content. A `Spacer` asks its enclosing container, and every
//! ancestor above it, to fill the available space along the nearest stack's
//! axis.
//!
//! # Usage
//!
//! ```ignore
//! use stackview::{HStack, Leaf, Spacer, Surface};
//!
//! let toolbar = HStack::new()
//!     .push(Leaf::new("title"))
//!     .push(Spacer::new())
//!     .push(Leaf::new("close"));
//!
//! let tree = Surface::new(toolbar).render();
//! assert!(tree.fills_width());
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Appearance and configuration
pub mod config;
pub mod palette;
pub mod theme;

// Layout system
pub mod layout;

// Mount/commit/render driver
pub mod surface;

// Re-export core types
pub use config::{PaletteMode, RenderConfig};
pub use error::LayoutError;
pub use palette::{CyclingPalette, DEBUG_PALETTE, PaletteSource, SeededPalette};
pub use primitives::Color;
pub use surface::Surface;
pub use theme::{ColorScheme, Environment, Theme, Tints};

pub use layout::{
    Alignment, Axis, BoxKind, BoxNode, Direction, Distribution, Divider, Edges, Element, ExpansionController,
    ExpansionHandle, ExpansionState, ForEach, HStack, Leaf, Length, Orientation, Spacer, StyleMap, VStack, View,
    ZStack,
};
