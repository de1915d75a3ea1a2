//! Host container
//!
//! Owns the animation scheduler and all five demos, renders whichever one
//! the screen selector points at, and drives the headless frame loop. The
//! demos never interact; the host only picks one to mount.

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info};

use motif_animation::AnimationScheduler;
use motif_layout::prelude::*;

use crate::demos::{
    box_transition, color, content_size, crossfade, visibility, BoxTransitionDemo, ColorDemo,
    ContentSizeDemo, CrossfadeDemo, VisibilityDemo,
};
use crate::DEMO_WIDTH;

/// Which demo the host renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DemoScreen {
    #[default]
    Color,
    BoxTransition,
    Visibility,
    ContentSize,
    Crossfade,
}

/// Errors from running the host
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("frame rate must be non-zero")]
    ZeroFrameRate,
}

/// The host application: one scheduler, five demos, one selected screen
pub struct DemoApp {
    scheduler: AnimationScheduler,
    screen: DemoScreen,
    color: ColorDemo,
    box_transition: BoxTransitionDemo,
    visibility: VisibilityDemo,
    content_size: ContentSizeDemo,
    crossfade: CrossfadeDemo,
}

impl DemoApp {
    pub fn new(screen: DemoScreen) -> Self {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        Self {
            scheduler,
            screen,
            color: ColorDemo::new(handle.clone()),
            box_transition: BoxTransitionDemo::new(handle.clone()),
            visibility: VisibilityDemo::new(handle.clone()),
            content_size: ContentSizeDemo::new(handle.clone()),
            crossfade: CrossfadeDemo::new(handle),
        }
    }

    pub fn screen(&self) -> DemoScreen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: DemoScreen) {
        self.screen = screen;
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Build the host surface with the selected demo mounted
    pub fn view(&mut self) -> Div {
        let demo = match self.screen {
            DemoScreen::Color => self.color.view(),
            DemoScreen::BoxTransition => self.box_transition.view(),
            DemoScreen::Visibility => self.visibility.view(),
            DemoScreen::ContentSize => self.content_size.view(),
            DemoScreen::Crossfade => self.crossfade.view(),
        };
        div().p(30.0).child(demo)
    }

    /// Build and lay out the current frame
    pub fn frame(&mut self) -> RenderTree {
        RenderTree::from_element(&self.view(), DEMO_WIDTH)
    }

    /// The toggle button tag of the selected demo
    pub fn toggle_tag(&self) -> &'static str {
        match self.screen {
            DemoScreen::Color => color::BUTTON_TAG,
            DemoScreen::BoxTransition => box_transition::BUTTON_TAG,
            DemoScreen::Visibility => visibility::BUTTON_TAG,
            DemoScreen::ContentSize => content_size::BUTTON_TAG,
            DemoScreen::Crossfade => crossfade::BUTTON_TAG,
        }
    }

    /// Press the selected demo's toggle button
    pub fn press_toggle(&mut self) -> Result<(), DemoError> {
        let tag = self.toggle_tag();
        let tree = self.frame();
        tree.click_tag(tag)?;
        info!(screen = ?self.screen, tag, "toggle pressed");
        Ok(())
    }

    /// Advance the scheduler and rebuild for `frames` frames at `fps`
    ///
    /// Returns the number of frames that still had active animations.
    pub fn run_frames(&mut self, frames: u32, fps: u32) -> Result<u32, DemoError> {
        if fps == 0 {
            return Err(DemoError::ZeroFrameRate);
        }
        let dt = 1.0 / fps as f32;
        let mut active_frames = 0;

        for frame in 0..frames {
            let active = self.scheduler.advance(dt);
            if active {
                active_frames += 1;
            }
            let tree = self.frame();
            debug!(
                frame,
                active,
                nodes = tree.node_count(),
                state = %self.describe(),
                "frame"
            );
        }
        info!(frames, active_frames, "frame loop finished");
        Ok(active_frames)
    }

    /// One-line summary of the selected demo's presentation state
    pub fn describe(&self) -> String {
        match self.screen {
            DemoScreen::Color => {
                let c = self.color.displayed_color();
                format!("color rgba({:.2}, {:.2}, {:.2}, {:.2})", c.r, c.g, c.b, c.a)
            }
            DemoScreen::BoxTransition => format!(
                "mode {:?} size {:.1}",
                self.box_transition.mode(),
                self.box_transition.displayed_size()
            ),
            DemoScreen::Visibility => format!(
                "visible {} mounted {}",
                self.visibility.is_visible(),
                self.visibility.is_mounted()
            ),
            DemoScreen::ContentSize => format!(
                "expanded {} target height {:.1}",
                self.content_size.is_expanded(),
                self.content_size.target_height()
            ),
            DemoScreen::Crossfade => format!(
                "scene {:?} fading {}",
                self.crossfade.scene(),
                self.crossfade.is_animating()
            ),
        }
    }

    // Accessors for scenario tests and the binary's reporting.

    pub fn color_demo(&self) -> &ColorDemo {
        &self.color
    }

    pub fn box_transition_demo(&self) -> &BoxTransitionDemo {
        &self.box_transition
    }

    pub fn visibility_demo(&self) -> &VisibilityDemo {
        &self.visibility
    }

    pub fn content_size_demo(&self) -> &ContentSizeDemo {
        &self.content_size
    }

    pub fn crossfade_demo(&self) -> &CrossfadeDemo {
        &self.crossfade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fps_is_an_error() {
        let mut app = DemoApp::new(DemoScreen::Color);
        assert!(matches!(app.run_frames(10, 0), Err(DemoError::ZeroFrameRate)));
    }

    #[test]
    fn test_idle_app_reports_no_active_frames() {
        let mut app = DemoApp::new(DemoScreen::Color);
        let active = app.run_frames(10, 60).unwrap();
        assert_eq!(active, 0);
    }

    #[test]
    fn test_press_then_run_settles() {
        let mut app = DemoApp::new(DemoScreen::BoxTransition);
        app.press_toggle().unwrap();
        // A second of frames is enough for the soft grow spring.
        let active = app.run_frames(120, 60).unwrap();
        assert!(active > 0);
        assert!(!app.scheduler().has_active_animations());
    }

    #[test]
    fn test_screen_switch_renders_other_demo() {
        let mut app = DemoApp::new(DemoScreen::Color);
        let tree = app.frame();
        assert!(tree.find_by_tag(color::BUTTON_TAG).is_some());

        app.set_screen(DemoScreen::Crossfade);
        let tree = app.frame();
        assert!(tree.find_by_tag(color::BUTTON_TAG).is_none());
        assert!(tree.find_by_tag(crossfade::BUTTON_TAG).is_some());
    }
}
