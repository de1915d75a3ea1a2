//! Animated visibility
//!
//! Wraps a child with an animated enter/exit: fade plus vertical expand on
//! enter, fade plus shrink on exit. The child stays mounted while the exit
//! animation is in flight and unmounts once it settles, so a hidden element
//! really is absent from the built tree. Fully reversible mid-flight.

use motif_animation::{AnimatedValue, SchedulerHandle, SpringConfig};

use crate::div::{div, Div};
use crate::tree::ElementBuilder;

/// State machine {Visible, Hidden} with animated transitions between the two
pub struct AnimatedVisibility {
    visible: bool,
    opacity: AnimatedValue,
    scale: AnimatedValue,
}

impl AnimatedVisibility {
    pub fn new(handle: SchedulerHandle, initially_visible: bool) -> Self {
        let initial = if initially_visible { 1.0 } else { 0.0 };
        Self {
            visible: initially_visible,
            opacity: AnimatedValue::new(handle.clone(), initial, SpringConfig::snappy()),
            scale: AnimatedValue::new(handle, initial, SpringConfig::snappy()),
        }
    }

    /// The target of the state machine, not the presented value
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip between Visible and Hidden, animating either way
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        let target = if visible { 1.0 } else { 0.0 };
        self.opacity.set_target(target);
        self.scale.set_target(target);
        tracing::debug!(visible, "visibility retargeted");
    }

    /// Toggle and return the new visibility
    pub fn toggle(&mut self) -> bool {
        self.set_visible(!self.visible);
        self.visible
    }

    /// Mounted while visible or while the exit animation is still running
    pub fn is_mounted(&self) -> bool {
        self.visible || self.opacity.is_animating() || self.scale.is_animating()
    }

    /// Wrap `child` in the current presentation frame
    ///
    /// Returns `None` once hidden and settled; callers thread this through
    /// [`Div::child_opt`].
    pub fn content(&self, child: impl ElementBuilder + 'static) -> Option<Div> {
        if !self.is_mounted() {
            return None;
        }
        Some(
            div()
                .opacity(self.opacity.get())
                .scale_y(self.scale.get())
                .child(child),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RenderTree;
    use motif_animation::AnimationScheduler;
    use motif_core::Color;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..600 {
            if !scheduler.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("visibility did not settle");
    }

    fn square() -> Div {
        div().square(64.0).bg(Color::BLUE).tag("square")
    }

    #[test]
    fn test_visible_child_is_present() {
        let scheduler = AnimationScheduler::new();
        let vis = AnimatedVisibility::new(scheduler.handle(), true);
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        assert!(tree.find_by_tag("square").is_some());
    }

    #[test]
    fn test_hidden_child_unmounts_after_exit() {
        let scheduler = AnimationScheduler::new();
        let mut vis = AnimatedVisibility::new(scheduler.handle(), true);

        vis.set_visible(false);
        // Mid-exit the child is still mounted and fading.
        scheduler.advance(1.0 / 60.0);
        assert!(vis.is_mounted());
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        let id = tree.find_by_tag("square").unwrap();
        assert!(tree.effective_opacity(id) < 1.0);

        settle(&scheduler);
        assert!(!vis.is_mounted());
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        assert!(tree.find_by_tag("square").is_none());
    }

    #[test]
    fn test_reversible_mid_exit() {
        let scheduler = AnimationScheduler::new();
        let mut vis = AnimatedVisibility::new(scheduler.handle(), true);

        vis.set_visible(false);
        for _ in 0..3 {
            scheduler.advance(1.0 / 60.0);
        }
        vis.set_visible(true);
        settle(&scheduler);

        assert!(vis.is_mounted());
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        let id = tree.find_by_tag("square").unwrap();
        assert!((tree.effective_opacity(id) - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_initially_hidden_mounts_nothing() {
        let scheduler = AnimationScheduler::new();
        let vis = AnimatedVisibility::new(scheduler.handle(), false);
        assert!(!vis.is_mounted());
        assert!(vis.content(square()).is_none());
    }

    #[test]
    fn test_enter_expands_height() {
        let scheduler = AnimationScheduler::new();
        let mut vis = AnimatedVisibility::new(scheduler.handle(), false);

        vis.set_visible(true);
        scheduler.advance(1.0 / 60.0);
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        let early_h = tree.bounds(tree.root().unwrap()).size.height;
        assert!(early_h < 64.0);

        settle(&scheduler);
        let ui = div().child_opt(vis.content(square()));
        let tree = RenderTree::from_element(&ui, 200.0);
        let settled_h = tree.bounds(tree.root().unwrap()).size.height;
        assert!((settled_h - 64.0).abs() < 0.5);
    }
}
