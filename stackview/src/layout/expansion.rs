//! Expansion propagation.
//!
//! Every layout node owns one `ExpansionController`. A controller records
//! whether its node must fill the available width and/or height, and holds a
//! weak link to the controller of the enclosing node.
//!
//! # Protocol
//!
//! ```text
//! Spacer (axis = row)
//!   -> request_expansion(row) on the enclosing node's controller
//!        sets expand_horizontally, then walks parent links to the root,
//!        setting expand_horizontally at every level
//! ```
//!
//! The walk is synchronous and happens entirely at request time, so a static
//! tree settles in one pass. Flags only ever go from `false` to `true`.
//! Forwarding is never short-circuited by local idempotence.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde::Serialize;

use super::axis::Axis;

/// Shared handle to a node's controller.
///
/// Strong handles live only in the owning node; descendants keep `Weak`
/// links, so dropping a node drops its controller.
pub type ExpansionHandle = Rc<ExpansionController>;

/// Expansion flags as a state machine. `ExpandBoth` is absorbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionState {
    #[default]
    Idle,
    ExpandRow,
    ExpandColumn,
    ExpandBoth,
}

impl ExpansionState {
    pub fn from_flags(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (false, false) => ExpansionState::Idle,
            (true, false) => ExpansionState::ExpandRow,
            (false, true) => ExpansionState::ExpandColumn,
            (true, true) => ExpansionState::ExpandBoth,
        }
    }

    /// Transition on a request along `axis`. `z` leaves the state unchanged.
    pub fn apply(self, axis: Axis) -> Self {
        match axis {
            Axis::Row => Self::from_flags(true, self.expands_vertically()),
            Axis::Column => Self::from_flags(self.expands_horizontally(), true),
            Axis::Z => self,
        }
    }

    #[inline]
    pub fn expands_horizontally(self) -> bool {
        matches!(self, ExpansionState::ExpandRow | ExpansionState::ExpandBoth)
    }

    #[inline]
    pub fn expands_vertically(self) -> bool {
        matches!(self, ExpansionState::ExpandColumn | ExpansionState::ExpandBoth)
    }
}

/// Per-node expansion state plus the upward forwarding link.
#[derive(Debug)]
pub struct ExpansionController {
    state: Cell<ExpansionState>,
    /// Enclosing node's controller. `None` for a root (forwarding is a no-op).
    parent: Option<Weak<ExpansionController>>,
    /// Distance from the root, for diagnostics.
    depth: u32,
}

impl ExpansionController {
    /// A controller with no parent. Requests stop here.
    pub fn root() -> ExpansionHandle {
        Self::attach(None)
    }

    /// A controller that forwards to `parent`.
    pub fn child_of(parent: &ExpansionHandle) -> ExpansionHandle {
        Self::attach(Some(parent))
    }

    pub(crate) fn attach(parent: Option<&ExpansionHandle>) -> ExpansionHandle {
        Rc::new(Self {
            state: Cell::new(ExpansionState::Idle),
            parent: parent.map(Rc::downgrade),
            depth: parent.map_or(0, |p| p.depth + 1),
        })
    }

    #[inline]
    pub fn state(&self) -> ExpansionState {
        self.state.get()
    }

    #[inline]
    pub fn expand_horizontally(&self) -> bool {
        self.state().expands_horizontally()
    }

    #[inline]
    pub fn expand_vertically(&self) -> bool {
        self.state().expands_vertically()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The forwarding target, if it is still mounted.
    pub fn parent(&self) -> Option<ExpansionHandle> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Request that this node and every ancestor fill space along `axis`.
    ///
    /// Requests along `z` are ignored. Repeating a request is harmless: the
    /// local flag update is idempotent, and the walk still visits every
    /// ancestor.
    pub fn request_expansion(&self, axis: Axis) {
        if !axis.is_propagating() {
            tracing::trace!(depth = self.depth, %axis, "ignoring expansion request");
            return;
        }

        let mut changed = usize::from(self.apply_local(axis));
        let mut visited = 1usize;
        let mut next = self.parent();
        while let Some(controller) = next {
            changed += usize::from(controller.apply_local(axis));
            visited += 1;
            next = controller.parent();
        }

        tracing::debug!(
            origin_depth = self.depth,
            %axis,
            visited,
            changed,
            "expansion request propagated"
        );
    }

    /// Update this controller's own flags. Returns whether the state changed.
    fn apply_local(&self, axis: Axis) -> bool {
        let before = self.state.get();
        let after = before.apply(axis);
        if after == before {
            return false;
        }
        tracing::trace!(depth = self.depth, ?before, ?after, "expansion state changed");
        self.state.set(after);
        true
    }
}
