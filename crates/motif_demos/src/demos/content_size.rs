//! Content-size animator
//!
//! A boolean caps the paragraph at three visible lines. The gray container's
//! bounds spring to the new intrinsic content size whenever the cap flips;
//! text beyond the cap is simply clipped by layout, with no truncation
//! indicator.

use motif_core::{Color, State};
use motif_layout::prelude::*;

use crate::DEMO_WIDTH;

/// Tag on the demo's button
pub const BUTTON_TAG: &str = "toggle-expansion";
/// Tag on the paragraph text
pub const TEXT_TAG: &str = "paragraph";

/// Visible lines while collapsed
pub const COLLAPSED_MAX_LINES: usize = 3;

/// The passage shown by the demo
pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing \
elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut \
enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut \
aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in \
voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit \
anim id est laborum.";

pub struct ContentSizeDemo {
    expanded: State<bool>,
    bounds: ContentSize,
}

impl ContentSizeDemo {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            expanded: State::new(false),
            bounds: ContentSize::new(handle),
        }
    }

    /// Build the demo's element tree for the current frame
    pub fn view(&mut self) -> Div {
        let label = if self.expanded.get() {
            "Collapse"
        } else {
            "Expand"
        };
        let expanded = self.expanded.clone();

        let mut paragraph = text(LOREM)
            .size(16.0)
            .align(TextAlign::Justify)
            .tag(TEXT_TAG);
        if !self.expanded.get() {
            paragraph = paragraph.max_lines(COLLAPSED_MAX_LINES);
        }
        let body = div().bg(Color::LIGHT_GRAY).p(16.0).child(paragraph);

        div()
            .flex_col()
            .items_center()
            .gap(16.0)
            .child(
                button(label)
                    .on_click(move || {
                        expanded.toggle();
                    })
                    .tag(BUTTON_TAG),
            )
            .child(self.bounds.content(body, DEMO_WIDTH))
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// Check if the container is still springing toward the content
    pub fn is_animating(&self) -> bool {
        self.bounds.is_animating()
    }

    /// Height the container is animating towards
    pub fn target_height(&self) -> f32 {
        self.bounds.target_size().height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_animation::AnimationScheduler;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..600 {
            if !scheduler.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("content size did not settle");
    }

    #[test]
    fn test_collapsed_caps_lines() {
        let scheduler = AnimationScheduler::new();
        let mut demo = ContentSizeDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        let id = tree.find_by_tag(TEXT_TAG).unwrap();
        assert!(tree.text_visible_lines(id).unwrap() <= COLLAPSED_MAX_LINES);
        assert!(tree.text_total_lines(id).unwrap() > COLLAPSED_MAX_LINES);
    }

    #[test]
    fn test_expanded_shows_all_lines() {
        let scheduler = AnimationScheduler::new();
        let mut demo = ContentSizeDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        assert!(demo.is_expanded());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        let id = tree.find_by_tag(TEXT_TAG).unwrap();
        assert_eq!(
            tree.text_visible_lines(id),
            tree.text_total_lines(id),
        );
    }

    #[test]
    fn test_bounds_animate_on_expand() {
        let scheduler = AnimationScheduler::new();
        let mut demo = ContentSizeDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let collapsed_target = demo.target_height();

        let _ = demo.view();
        assert!(demo.is_animating());
        assert!(demo.target_height() > collapsed_target);

        settle(&scheduler);
        let _ = demo.view();
        assert!(!demo.is_animating());
    }

    #[test]
    fn test_double_press_returns_to_collapsed_bounds() {
        let scheduler = AnimationScheduler::new();
        let mut demo = ContentSizeDemo::new(scheduler.handle());

        let _ = demo.view();
        let initial_target = demo.target_height();

        for _ in 0..2 {
            let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
            tree.click_tag(BUTTON_TAG).unwrap();
            let _ = demo.view();
            settle(&scheduler);
        }

        assert!(!demo.is_expanded());
        assert!((demo.target_height() - initial_target).abs() < 0.5);
    }
}
