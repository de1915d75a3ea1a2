//! State-driven transitions
//!
//! A `Transition<S>` animates several properties together whenever its target
//! state changes. Each float track maps the state to a value and, optionally,
//! to a spring curve; the curve is chosen by evaluating the spec at the
//! TARGET state, so expanding and collapsing can feel different. Color tracks
//! run on the default timed tween.
//!
//! ```
//! use motif_animation::{AnimationScheduler, SpringConfig, Transition};
//!
//! #[derive(Clone, Copy, PartialEq)]
//! enum BoxState { Small, Large }
//!
//! let scheduler = AnimationScheduler::new();
//! let mut transition = Transition::new(scheduler.handle(), BoxState::Small);
//! let size = transition.animate_f32_with_spec(
//!     |s| match s { BoxState::Small => 32.0, BoxState::Large => 64.0 },
//!     |target| match target {
//!         BoxState::Large => SpringConfig::from_ratio(0.75, 50.0),
//!         BoxState::Small => SpringConfig::from_ratio(0.5, 1500.0),
//!     },
//! );
//! transition.set_target(BoxState::Large);
//! assert_eq!(transition.target_value(size), 64.0);
//! ```

use crate::scheduler::{AnimatedColor, AnimatedValue, SchedulerHandle};
use crate::spring::SpringConfig;
use motif_core::Color;

/// Handle to a float track registered on a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatTrackId(usize);

/// Handle to a color track registered on a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTrackId(usize);

type ValueFn<S, T> = Box<dyn Fn(S) -> T + Send>;

struct FloatTrack<S> {
    value: AnimatedValue,
    map: ValueFn<S, f32>,
    /// Spring spec evaluated at the target state on every retarget
    spec: Option<ValueFn<S, SpringConfig>>,
}

struct ColorTrack<S> {
    value: AnimatedColor,
    map: ValueFn<S, Color>,
}

/// Animates a set of properties as a function of a target state
pub struct Transition<S> {
    handle: SchedulerHandle,
    target: S,
    floats: Vec<FloatTrack<S>>,
    colors: Vec<ColorTrack<S>>,
}

impl<S: Copy + PartialEq> Transition<S> {
    /// Create a transition resting at `initial`
    pub fn new(handle: SchedulerHandle, initial: S) -> Self {
        Self {
            handle,
            target: initial,
            floats: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Register a float track with the default spring for both directions
    pub fn animate_f32<F>(&mut self, map: F) -> FloatTrackId
    where
        F: Fn(S) -> f32 + Send + 'static,
    {
        let initial = map(self.target);
        self.floats.push(FloatTrack {
            value: AnimatedValue::with_default(self.handle.clone(), initial),
            map: Box::new(map),
            spec: None,
        });
        FloatTrackId(self.floats.len() - 1)
    }

    /// Register a float track whose spring curve depends on the target state
    pub fn animate_f32_with_spec<F, G>(&mut self, map: F, spec: G) -> FloatTrackId
    where
        F: Fn(S) -> f32 + Send + 'static,
        G: Fn(S) -> SpringConfig + Send + 'static,
    {
        let initial = map(self.target);
        let config = spec(self.target);
        self.floats.push(FloatTrack {
            value: AnimatedValue::new(self.handle.clone(), initial, config),
            map: Box::new(map),
            spec: Some(Box::new(spec)),
        });
        FloatTrackId(self.floats.len() - 1)
    }

    /// Register a color track (default-duration tween)
    pub fn animate_color<F>(&mut self, map: F) -> ColorTrackId
    where
        F: Fn(S) -> Color + Send + 'static,
    {
        let initial = map(self.target);
        self.colors.push(ColorTrack {
            value: AnimatedColor::new(self.handle.clone(), initial),
            map: Box::new(map),
        });
        ColorTrackId(self.colors.len() - 1)
    }

    /// Retarget every track at once
    ///
    /// Spring specs are evaluated at the new target state before the
    /// retarget, so direction-dependent curves apply to the motion that is
    /// about to start.
    pub fn set_target(&mut self, target: S) {
        if target == self.target {
            return;
        }
        self.target = target;

        for track in &mut self.floats {
            if let Some(spec) = &track.spec {
                track.value.set_config(spec(target));
            }
            track.value.set_target((track.map)(target));
        }
        for track in &mut self.colors {
            track.value.set_target((track.map)(target));
        }
    }

    /// The state the transition is animating towards
    pub fn target(&self) -> S {
        self.target
    }

    /// Current animated value of a float track
    pub fn value(&self, id: FloatTrackId) -> f32 {
        self.floats[id.0].value.get()
    }

    /// The value a float track is animating towards
    pub fn target_value(&self, id: FloatTrackId) -> f32 {
        self.floats[id.0].value.target()
    }

    /// Current animated value of a color track
    pub fn color(&self, id: ColorTrackId) -> Color {
        self.colors[id.0].value.get()
    }

    /// The color a color track is animating towards
    pub fn target_color(&self, id: ColorTrackId) -> Color {
        self.colors[id.0].value.target()
    }

    /// Check if any track is still in flight
    pub fn is_animating(&self) -> bool {
        self.floats.iter().any(|t| t.value.is_animating())
            || self.colors.iter().any(|t| t.value.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AnimationScheduler;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Mode {
        Closed,
        Open,
    }

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..600 {
            if !scheduler.advance(1.0 / 60.0) {
                return;
            }
        }
        panic!("transition did not settle");
    }

    #[test]
    fn test_tracks_start_at_initial_state_values() {
        let scheduler = AnimationScheduler::new();
        let mut transition = Transition::new(scheduler.handle(), Mode::Closed);
        let width = transition.animate_f32(|m| match m {
            Mode::Closed => 10.0,
            Mode::Open => 80.0,
        });
        let tint = transition.animate_color(|m| match m {
            Mode::Closed => Color::BLUE,
            Mode::Open => Color::RED,
        });

        assert_eq!(transition.value(width), 10.0);
        assert_eq!(transition.color(tint), Color::BLUE);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_all_tracks_retarget_together() {
        let scheduler = AnimationScheduler::new();
        let mut transition = Transition::new(scheduler.handle(), Mode::Closed);
        let width = transition.animate_f32(|m| match m {
            Mode::Closed => 10.0,
            Mode::Open => 80.0,
        });
        let tint = transition.animate_color(|m| match m {
            Mode::Closed => Color::BLUE,
            Mode::Open => Color::RED,
        });

        transition.set_target(Mode::Open);
        assert!(transition.is_animating());
        assert_eq!(transition.target_value(width), 80.0);
        assert_eq!(transition.target_color(tint), Color::RED);

        settle(&scheduler);
        assert!((transition.value(width) - 80.0).abs() < 0.1);
        assert_eq!(transition.color(tint), Color::RED);
    }

    #[test]
    fn test_spec_evaluated_at_target_state() {
        let opening = SpringConfig::from_ratio(0.75, 50.0);
        let closing = SpringConfig::from_ratio(0.5, 1500.0);

        let scheduler = AnimationScheduler::new();
        let mut transition = Transition::new(scheduler.handle(), Mode::Closed);
        let width = transition.animate_f32_with_spec(
            |m| match m {
                Mode::Closed => 10.0,
                Mode::Open => 80.0,
            },
            move |target| match target {
                Mode::Open => opening,
                Mode::Closed => closing,
            },
        );

        // Opening uses the low-stiffness spring: after a quarter second the
        // value has barely moved compared to what the stiff closing spring
        // would have done.
        transition.set_target(Mode::Open);
        for _ in 0..15 {
            scheduler.advance(1.0 / 60.0);
        }
        let opening_progress = (transition.value(width) - 10.0) / 70.0;
        settle(&scheduler);

        // And back: the closing spring is much stiffer, so the same number
        // of frames covers far more of the distance.
        transition.set_target(Mode::Closed);
        for _ in 0..15 {
            scheduler.advance(1.0 / 60.0);
        }
        let closing_progress = (80.0 - transition.value(width)) / 70.0;

        assert!(
            closing_progress > opening_progress,
            "closing {closing_progress} should outpace opening {opening_progress}"
        );
    }

    #[test]
    fn test_same_target_is_noop() {
        let scheduler = AnimationScheduler::new();
        let mut transition = Transition::new(scheduler.handle(), Mode::Closed);
        let width = transition.animate_f32(|m| match m {
            Mode::Closed => 10.0,
            Mode::Open => 80.0,
        });
        transition.set_target(Mode::Closed);
        assert!(!transition.is_animating());
        assert_eq!(transition.value(width), 10.0);
    }
}
