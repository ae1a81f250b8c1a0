//! Mount and render contexts.
//!
//! Mounting walks the element tree top-down. The enclosing node's controller
//! and the stack axis are passed explicitly to every `mount` call; the
//! `MountContext` only carries the effect queue and path bookkeeping.
//!
//! Spacer effects are queued in post-order (children before parents) and
//! flushed by `EffectQueue::flush` after the whole tree is attached.

use std::rc::{Rc, Weak};

use crate::palette::PaletteSource;
use crate::theme::Theme;

use super::axis::Axis;
use super::expansion::{ExpansionController, ExpansionHandle};

/// A queued expansion request.
///
/// Both ends are weak: unmounting the requesting spacer or its target node
/// before the flush drops the request.
#[derive(Debug)]
pub struct PendingEffect {
    /// The requesting spacer's own controller (liveness token).
    source: Weak<ExpansionController>,
    /// Controller of the node enclosing the spacer.
    target: Weak<ExpansionController>,
    axis: Axis,
}

/// Outcome of flushing the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub applied: usize,
    pub dropped: usize,
}

/// Post-mount effects awaiting commit, in the order they must run.
#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: Vec<PendingEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, source: &ExpansionHandle, target: &ExpansionHandle, axis: Axis) {
        self.pending.push(PendingEffect {
            source: Rc::downgrade(source),
            target: Rc::downgrade(target),
            axis,
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Run every queued request in order. Requests whose spacer or target
    /// has been unmounted are discarded.
    pub fn flush(&mut self) -> FlushStats {
        let mut stats = FlushStats::default();
        for effect in self.pending.drain(..) {
            match (effect.source.upgrade(), effect.target.upgrade()) {
                (Some(_), Some(target)) => {
                    target.request_expansion(effect.axis);
                    stats.applied += 1;
                }
                _ => {
                    tracing::trace!(axis = %effect.axis, "dropping expansion request from unmounted spacer");
                    stats.dropped += 1;
                }
            }
        }
        stats
    }
}

/// State threaded through a mount walk.
pub struct MountContext<'a> {
    effects: &'a mut EffectQueue,
    /// Child indices from the root to the element being mounted.
    path: Vec<usize>,
    /// Layout nodes attached so far.
    attached: usize,
}

impl<'a> MountContext<'a> {
    pub fn new(effects: &'a mut EffectQueue) -> Self {
        Self {
            effects,
            path: Vec::with_capacity(16),
            attached: 0,
        }
    }

    /// Enter the `index`-th child of the current element.
    pub fn enter(&mut self, index: usize) {
        self.path.push(index);
    }

    pub fn exit(&mut self) {
        self.path.pop();
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub(crate) fn note_attached(&mut self) {
        self.attached += 1;
    }

    pub fn attached(&self) -> usize {
        self.attached
    }

    /// Queue a spacer's expansion request against `target`.
    pub(crate) fn queue_expansion(&mut self, source: &ExpansionHandle, target: &ExpansionHandle, axis: Axis) {
        tracing::trace!(path = ?self.path, %axis, "queued spacer expansion");
        self.effects.push(source, target, axis);
    }
}

/// Inputs to a render walk.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub palette: &'a mut dyn PaletteSource,
    /// Border every layout node, regardless of its own `debug_border`.
    pub force_debug_borders: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, palette: &'a mut dyn PaletteSource) -> Self {
        Self {
            theme,
            palette,
            force_debug_borders: false,
        }
    }
}
