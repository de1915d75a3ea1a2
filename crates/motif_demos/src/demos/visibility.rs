//! Visibility animator
//!
//! A boolean mounts/unmounts a blue square with the default animated
//! enter/exit (fade plus vertical expand/shrink). The button label follows
//! the state: "Hide" while visible, "Show" while hidden.

use motif_core::{Color, State};
use motif_layout::prelude::*;

use crate::SQUARE_SIZE;

/// Tag on the demo's button
pub const BUTTON_TAG: &str = "toggle-visibility";
/// Tag on the appearing/disappearing square
pub const BOX_TAG: &str = "visibility-box";

pub struct VisibilityDemo {
    visible: State<bool>,
    visibility: AnimatedVisibility,
}

impl VisibilityDemo {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            visible: State::new(true),
            visibility: AnimatedVisibility::new(handle, true),
        }
    }

    /// Build the demo's element tree for the current frame
    pub fn view(&mut self) -> Div {
        self.visibility.set_visible(self.visible.get());

        let label = if self.visible.get() { "Hide" } else { "Show" };
        let visible = self.visible.clone();
        div()
            .flex_col()
            .items_center()
            .gap(16.0)
            .child(
                button(label)
                    .on_click(move || {
                        visible.toggle();
                    })
                    .tag(BUTTON_TAG),
            )
            .child_opt(
                self.visibility
                    .content(div().square(SQUARE_SIZE).bg(Color::BLUE).tag(BOX_TAG)),
            )
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Mounted while visible or while the exit animation is running
    pub fn is_mounted(&self) -> bool {
        self.visibility.is_mounted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEMO_WIDTH;
    use motif_animation::AnimationScheduler;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..600 {
            if !scheduler.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("visibility did not settle");
    }

    #[test]
    fn test_hide_unmounts_square_after_exit() {
        let scheduler = AnimationScheduler::new();
        let mut demo = VisibilityDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        assert!(tree.find_by_tag(BOX_TAG).is_some());

        tree.click_tag(BUTTON_TAG).unwrap();
        assert!(!demo.is_visible());

        // Exit is animated: still mounted on the next frame.
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        scheduler.advance(1.0 / 60.0);
        assert!(tree.find_by_tag(BOX_TAG).is_some());

        settle(&scheduler);
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        assert!(tree.find_by_tag(BOX_TAG).is_none());
    }

    #[test]
    fn test_show_remounts() {
        let scheduler = AnimationScheduler::new();
        let mut demo = VisibilityDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();
        settle(&scheduler);

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();
        settle(&scheduler);

        assert!(demo.is_visible());
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        let id = tree.find_by_tag(BOX_TAG).unwrap();
        assert_eq!(tree.effective_opacity(id), 1.0);
    }

    fn button_label(tree: &RenderTree) -> String {
        let id = tree.find_by_tag(BUTTON_TAG).unwrap();
        let child = tree.node(id).unwrap().children[0];
        match &tree.node(child).unwrap().kind {
            motif_layout::NodeKind::Text { content, .. } => content.clone(),
            other => panic!("unexpected button child {other:?}"),
        }
    }

    #[test]
    fn test_button_label_follows_state() {
        let scheduler = AnimationScheduler::new();
        let mut demo = VisibilityDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        assert_eq!(button_label(&tree), "Hide");

        tree.click_tag(BUTTON_TAG).unwrap();
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        assert_eq!(button_label(&tree), "Show");
    }
}
