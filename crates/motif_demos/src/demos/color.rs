//! Binary color animator
//!
//! A boolean flag selects one of two colors; the displayed color tweens
//! between the endpoints over the default eased duration.

use motif_core::{Color, State};
use motif_layout::prelude::*;

use crate::SQUARE_SIZE;

/// Tag on the demo's button
pub const BUTTON_TAG: &str = "change-color";
/// Tag on the colored square
pub const BOX_TAG: &str = "color-box";

pub struct ColorDemo {
    blue: State<bool>,
    color: AnimatedColor,
}

impl ColorDemo {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            blue: State::new(true),
            color: AnimatedColor::new(handle, Color::BLUE),
        }
    }

    /// Build the demo's element tree for the current frame
    pub fn view(&mut self) -> Div {
        // Presentation is a function of the flag; retargeting with an
        // unchanged color is a no-op.
        self.color
            .set_target(if self.blue.get() { Color::BLUE } else { Color::RED });

        let blue = self.blue.clone();
        div()
            .flex_col()
            .items_center()
            .gap(16.0)
            .child(
                button("Change Color")
                    .on_click(move || {
                        blue.toggle();
                    })
                    .tag(BUTTON_TAG),
            )
            .child(div().square(SQUARE_SIZE).bg(self.color.get()).tag(BOX_TAG))
    }

    pub fn is_blue(&self) -> bool {
        self.blue.get()
    }

    /// The color currently displayed
    pub fn displayed_color(&self) -> Color {
        self.color.get()
    }

    /// The color the demo is animating towards
    pub fn target_color(&self) -> Color {
        self.color.target()
    }
}
