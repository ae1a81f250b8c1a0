//! Render surface: owns a tree and drives mount, commit and render.
//!
//! ```ignore
//! let mut surface = Surface::new(HStack::new().push(Leaf::new("a")).push(Spacer::new()));
//! let tree = surface.render();
//! assert!(tree.fills_width());
//! ```

use crate::config::RenderConfig;
use crate::error::LayoutError;
use crate::layout::{Axis, BoxNode, EffectQueue, Element, ExpansionHandle, FlushStats, MountContext, RenderContext};
use crate::palette::PaletteSource;
use crate::theme::Environment;

pub struct Surface {
    root: Element,
    environment: Environment,
    palette: Box<dyn PaletteSource>,
    config: RenderConfig,
    effects: EffectQueue,
    mounted: bool,
}

impl Surface {
    pub fn new(root: impl Into<Element>) -> Self {
        Self::with_config(root, RenderConfig::default())
    }

    pub fn with_config(root: impl Into<Element>, config: RenderConfig) -> Self {
        Self {
            root: root.into(),
            environment: Environment::new(config.color_scheme),
            palette: config.palette.build(),
            config,
            effects: EffectQueue::new(),
            mounted: false,
        }
    }

    /// Replace the debug border color source.
    pub fn with_palette(mut self, palette: impl PaletteSource + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Attach controllers for the whole tree and queue spacer effects.
    ///
    /// Does nothing if the tree is already mounted. Returns the number of
    /// layout nodes attached.
    pub fn mount(&mut self) -> usize {
        if self.mounted {
            tracing::trace!("surface already mounted");
            return 0;
        }
        let mut ctx = MountContext::new(&mut self.effects);
        self.root.mount(&mut ctx, None, Axis::default());
        let attached = ctx.attached();
        self.mounted = true;
        tracing::debug!(attached, pending = self.effects.len(), "mounted tree");
        attached
    }

    /// Effects queued by the last mount and not yet committed.
    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Run queued spacer effects, children before parents.
    pub fn commit(&mut self) -> FlushStats {
        let stats = self.effects.flush();
        if stats != FlushStats::default() {
            tracing::debug!(applied = stats.applied, dropped = stats.dropped, "committed effects");
        }
        stats
    }

    /// Mount if needed, commit, and produce the box tree.
    pub fn render(&mut self) -> BoxNode {
        self.mount();
        self.commit();

        let mut ctx = RenderContext::new(self.environment.theme(), self.palette.as_mut());
        ctx.force_debug_borders = self.config.debug_borders;
        self.root.render(&mut ctx)
    }

    /// Remove the element at `path` and discard its controllers.
    ///
    /// Effects queued by spacers in the removed subtree are dropped at the
    /// next commit. The root itself cannot be unmounted; use `set_root`.
    pub fn unmount(&mut self, path: &[usize]) -> Result<(), LayoutError> {
        let invalid = || LayoutError::InvalidPath(path.to_vec());
        let (&last, parent_path) = path.split_last().ok_or_else(invalid)?;

        let mut parent = &mut self.root;
        for &index in parent_path {
            parent = parent.child_mut(index).ok_or_else(invalid)?;
        }
        let removed = parent.remove_child(last).ok_or_else(invalid)?;
        tracing::debug!(?path, element = removed.name(), "unmounted element");
        Ok(())
    }

    /// The element at `path` (empty path is the root).
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        path.iter()
            .try_fold(&self.root, |element, &index| element.children().get(index))
    }

    /// Controller of the layout node at `path`, if it has one and is mounted.
    pub fn controller_at(&self, path: &[usize]) -> Option<&ExpansionHandle> {
        self.element_at(path)?.controller()
    }

    /// Swap in a new tree. The old tree and its pending effects are discarded.
    pub fn set_root(&mut self, root: impl Into<Element>) {
        self.root = root.into();
        self.effects.clear();
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ExpansionState, HStack, Leaf, Spacer, VStack};
    use crate::palette::CyclingPalette;

    #[test]
    fn test_mount_is_idempotent() {
        let mut surface = Surface::new(VStack::new().push(HStack::new().push(Spacer::new())));
        assert_eq!(surface.mount(), 3);
        assert_eq!(surface.pending_effects(), 1);
        assert_eq!(surface.mount(), 0);
        assert_eq!(surface.pending_effects(), 1);
    }

    #[test]
    fn test_commit_applies_pending() {
        let mut surface = Surface::new(HStack::new().push(Spacer::new()));
        surface.mount();
        assert_eq!(surface.controller_at(&[]).unwrap().state(), ExpansionState::Idle);

        let stats = surface.commit();
        assert_eq!(stats, FlushStats { applied: 1, dropped: 0 });
        assert_eq!(surface.controller_at(&[]).unwrap().state(), ExpansionState::ExpandRow);
    }

    #[test]
    fn test_unmount_rejects_bad_paths() {
        let mut surface = Surface::new(VStack::new().push(Leaf::new("a")));
        assert!(matches!(surface.unmount(&[]), Err(LayoutError::InvalidPath(p)) if p.is_empty()));
        assert!(matches!(surface.unmount(&[4]), Err(LayoutError::InvalidPath(_))));
        assert!(matches!(surface.unmount(&[0, 0]), Err(LayoutError::InvalidPath(_))));
        assert!(surface.unmount(&[0]).is_ok());
        assert!(surface.root().children().is_empty());
    }

    #[test]
    fn test_leaf_has_no_controller() {
        let mut surface = Surface::new(VStack::new().push(Leaf::new("a")));
        surface.mount();
        assert!(surface.controller_at(&[]).is_some());
        assert!(surface.controller_at(&[0]).is_none());
        assert!(surface.controller_at(&[1]).is_none());
    }

    #[test]
    fn test_set_root_discards_pending_effects() {
        let mut surface = Surface::new(HStack::new().push(Spacer::new()));
        surface.mount();
        assert_eq!(surface.pending_effects(), 1);

        surface.set_root(VStack::new());
        assert!(!surface.is_mounted());
        assert_eq!(surface.pending_effects(), 0);
        assert!(!surface.render().fills_height());
    }

    #[test]
    fn test_forced_debug_borders() {
        let config = RenderConfig {
            debug_borders: true,
            ..RenderConfig::default()
        };
        let mut surface = Surface::with_config(VStack::new().push(VStack::new()), config)
            .with_palette(CyclingPalette::starting_at(4));
        let tree = surface.render();
        assert_eq!(tree.style("border"), Some("2px solid blue"));
        assert_eq!(tree.children[0].style("border"), Some("2px solid indigo"));
    }
}
