//! Cross-fade between mutually exclusive scenes
//!
//! While a fade is in flight both the outgoing and incoming variants are
//! mounted with complementary opacity; once the tween finishes only the
//! incoming variant remains. Scene identity is any `Copy + PartialEq` type,
//! typically a two-valued enum.

use motif_animation::{SchedulerHandle, Tween, TweenId};

use crate::div::{div, Div};
use crate::tree::ElementBuilder;

/// A timed cross-dissolve between scenes selected by `S`
pub struct Crossfade<S> {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    tween: Tween,
    current: S,
    outgoing: Option<S>,
}

impl<S: Copy + PartialEq> Crossfade<S> {
    /// Create a crossfade resting on `initial` with the default duration
    pub fn new(handle: SchedulerHandle, initial: S) -> Self {
        Self {
            handle,
            tween_id: None,
            tween: Tween::default(),
            current: initial,
            outgoing: None,
        }
    }

    /// Override the dissolve tween
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tween = tween;
        self
    }

    /// The scene being faded in (or at rest)
    pub fn scene(&self) -> S {
        self.current
    }

    /// Switch scenes, dissolving from the one currently shown
    pub fn set_scene(&mut self, scene: S) {
        if scene == self.current {
            return;
        }
        self.outgoing = Some(self.current);
        self.current = scene;

        match self.tween_id {
            Some(id) => self.handle.restart_tween(id),
            None => {
                self.tween_id = self.handle.register_tween(self.tween);
                if let Some(id) = self.tween_id {
                    self.handle.restart_tween(id);
                }
            }
        }
    }

    /// Check if a dissolve is still in flight
    pub fn is_animating(&self) -> bool {
        match self.tween_id {
            Some(id) => self.handle.tween_is_playing(id),
            None => false,
        }
    }

    /// Eased dissolve progress; 1.0 at rest
    fn progress(&self) -> f32 {
        match self.tween_id {
            Some(id) => self.handle.tween_progress(id).unwrap_or(1.0),
            None => 1.0,
        }
    }

    /// Build the current frame, rendering each mounted scene with `render`
    pub fn content<F, E>(&self, render: F) -> Div
    where
        F: Fn(S) -> E,
        E: ElementBuilder + 'static,
    {
        let t = self.progress();
        if t < 1.0 {
            if let Some(outgoing) = self.outgoing {
                return div()
                    .child(div().opacity(1.0 - t).child(render(outgoing)))
                    .child(div().opacity(t).child(render(self.current)));
            }
        }
        div().child(render(self.current))
    }
}

impl<S> Drop for Crossfade<S> {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}
