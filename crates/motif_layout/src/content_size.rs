//! Content-size animation
//!
//! FLIP-style bounds animation: the child's intrinsic size is measured
//! instantly, then the rendered container springs toward it. Changes below a
//! pixel threshold snap without animating. Content is clipped to the animated
//! bounds while in flight.

use motif_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use motif_core::Size;

use crate::div::{div, Div};
use crate::tree::{measure, ElementBuilder};

/// Ignore intrinsic size changes below this many pixels
const SNAP_THRESHOLD: f32 = 1.0;

/// Animates a container's bounds toward its child's intrinsic size
pub struct ContentSize {
    width: AnimatedValue,
    height: AnimatedValue,
    initialized: bool,
}

impl ContentSize {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            width: AnimatedValue::new(handle.clone(), 0.0, SpringConfig::snappy()),
            height: AnimatedValue::new(handle, 0.0, SpringConfig::snappy()),
            initialized: false,
        }
    }

    /// Use a different spring for bounds changes
    pub fn with_spring(mut self, config: SpringConfig) -> Self {
        self.width.set_config(config);
        self.height.set_config(config);
        self
    }

    /// Wrap `child`, measured at `max_width`, in the animated container
    ///
    /// The first call adopts the intrinsic size without animating; later
    /// calls retarget the springs whenever the intrinsic size changed.
    pub fn content(&mut self, child: impl ElementBuilder + 'static, max_width: f32) -> Div {
        let intrinsic = measure(&child, max_width);
        self.advance_to(intrinsic);
        div()
            .w(self.width.get())
            .h(self.height.get())
            .clip()
            .child(child)
    }

    /// Current animated bounds
    pub fn size(&self) -> Size {
        Size::new(self.width.get(), self.height.get())
    }

    /// The bounds being animated towards
    pub fn target_size(&self) -> Size {
        Size::new(self.width.target(), self.height.target())
    }

    /// Check if the bounds are still catching up to the content
    pub fn is_animating(&self) -> bool {
        self.width.is_animating() || self.height.is_animating()
    }

    fn advance_to(&mut self, intrinsic: Size) {
        if !self.initialized {
            self.width.set_immediate(intrinsic.width);
            self.height.set_immediate(intrinsic.height);
            self.initialized = true;
            return;
        }

        if (intrinsic.width - self.width.target()).abs() > SNAP_THRESHOLD {
            self.width.set_target(intrinsic.width);
        }
        if (intrinsic.height - self.height.target()).abs() > SNAP_THRESHOLD {
            tracing::debug!(
                from = self.height.get(),
                to = intrinsic.height,
                "content height retargeted"
            );
            self.height.set_target(intrinsic.height);
        }
    }
}
