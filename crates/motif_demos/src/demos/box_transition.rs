//! Multi-property transition animator
//!
//! A two-valued mode drives color and size at once. Size uses a spring picked
//! by the transition DIRECTION: growing is loose and bouncy, shrinking is
//! stiff and quick. The curve is a function of the target state, not the
//! source state.

use motif_core::{Color, State};
use motif_layout::prelude::*;

use crate::SQUARE_SIZE;

/// Tag on the demo's button
pub const BUTTON_TAG: &str = "change-color-and-size";
/// Tag on the animated square
pub const BOX_TAG: &str = "transition-box";

/// The two box modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxState {
    #[default]
    Small,
    Large,
}

impl BoxState {
    /// The other member of the domain
    pub fn toggled(self) -> Self {
        match self {
            BoxState::Small => BoxState::Large,
            BoxState::Large => BoxState::Small,
        }
    }

    fn size(self) -> f32 {
        match self {
            BoxState::Small => SQUARE_SIZE / 2.0,
            BoxState::Large => SQUARE_SIZE,
        }
    }

    fn color(self) -> Color {
        match self {
            BoxState::Small => Color::BLUE,
            BoxState::Large => Color::RED,
        }
    }
}

/// Spring used when growing toward `Large`: underdamped and very soft
fn grow_spring() -> SpringConfig {
    SpringConfig::from_ratio(0.75, 50.0)
}

/// Spring used when shrinking toward `Small`: bouncier but much stiffer
fn shrink_spring() -> SpringConfig {
    SpringConfig::from_ratio(0.5, 1500.0)
}

pub struct BoxTransitionDemo {
    state: State<BoxState>,
    transition: Transition<BoxState>,
    size: motif_animation::FloatTrackId,
    color: motif_animation::ColorTrackId,
}

impl BoxTransitionDemo {
    pub fn new(handle: SchedulerHandle) -> Self {
        let mut transition = Transition::new(handle, BoxState::default());
        let size = transition.animate_f32_with_spec(
            |s: BoxState| s.size(),
            |target| match target {
                BoxState::Large => grow_spring(),
                BoxState::Small => shrink_spring(),
            },
        );
        let color = transition.animate_color(|s: BoxState| s.color());

        Self {
            state: State::new(BoxState::default()),
            transition,
            size,
            color,
        }
    }

    /// Build the demo's element tree for the current frame
    pub fn view(&mut self) -> Div {
        self.transition.set_target(self.state.get());

        let state = self.state.clone();
        div()
            .flex_col()
            .items_center()
            .gap(16.0)
            .child(
                button("Change Color and Size")
                    .on_click(move || {
                        state.update(|s| *s = s.toggled());
                    })
                    .tag(BUTTON_TAG),
            )
            .child(
                div()
                    .square(self.transition.value(self.size))
                    .bg(self.transition.color(self.color))
                    .tag(BOX_TAG),
            )
    }

    pub fn mode(&self) -> BoxState {
        self.state.get()
    }

    /// Size currently displayed
    pub fn displayed_size(&self) -> f32 {
        self.transition.value(self.size)
    }

    /// Size being animated towards
    pub fn target_size(&self) -> f32 {
        self.transition.target_value(self.size)
    }

    /// Color being animated towards
    pub fn target_color(&self) -> Color {
        self.transition.target_color(self.color)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEMO_WIDTH;
    use motif_animation::AnimationScheduler;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..1200 {
            if !scheduler.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("transition did not settle");
    }

    #[test]
    fn test_targets_track_mode() {
        let scheduler = AnimationScheduler::new();
        let mut demo = BoxTransitionDemo::new(scheduler.handle());

        assert_eq!(demo.mode(), BoxState::Small);
        assert_eq!(demo.target_size(), SQUARE_SIZE / 2.0);

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();

        assert_eq!(demo.mode(), BoxState::Large);
        assert_eq!(demo.target_size(), SQUARE_SIZE);
        assert_eq!(demo.target_color(), Color::RED);
        assert!(demo.is_animating());
    }

    #[test]
    fn test_settles_at_full_square_size() {
        let scheduler = AnimationScheduler::new();
        let mut demo = BoxTransitionDemo::new(scheduler.handle());

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();
        settle(&scheduler);

        assert!((demo.displayed_size() - SQUARE_SIZE).abs() < 0.1);

        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        let id = tree.find_by_tag(BOX_TAG).unwrap();
        assert_eq!(tree.bounds(id).size.width, SQUARE_SIZE);
    }

    #[test]
    fn test_shrinking_outpaces_growing() {
        let scheduler = AnimationScheduler::new();
        let mut demo = BoxTransitionDemo::new(scheduler.handle());
        let travel = SQUARE_SIZE / 2.0;

        // Grow: soft spring, little progress in a quarter second.
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();
        for _ in 0..15 {
            scheduler.advance(1.0 / 60.0);
        }
        let grow_progress = (demo.displayed_size() - travel) / travel;
        settle(&scheduler);

        // Shrink: stiff spring covers far more ground in the same frames.
        let tree = RenderTree::from_element(&demo.view(), DEMO_WIDTH);
        tree.click_tag(BUTTON_TAG).unwrap();
        let _ = demo.view();
        for _ in 0..15 {
            scheduler.advance(1.0 / 60.0);
        }
        let shrink_progress = (SQUARE_SIZE - demo.displayed_size()) / travel;

        assert!(
            shrink_progress > grow_progress,
            "shrink {shrink_progress} should outpace grow {grow_progress}"
        );
    }
}
