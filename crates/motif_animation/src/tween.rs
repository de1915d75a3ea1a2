//! Timed tween animations
//!
//! A `Tween` runs eased progress from 0.0 to 1.0 over a fixed duration. It is
//! the engine behind color animation and cross-fades, where the toolkit's
//! default is a timed curve rather than spring physics.

use crate::easing::Easing;

/// Default tween duration in milliseconds
pub const DEFAULT_TWEEN_MS: u32 = 300;

/// A fixed-duration eased progress animation
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl Tween {
    /// Create a tween with the given duration; starts already finished
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            easing: Easing::default(),
            elapsed_ms: duration_ms.max(1) as f32,
            playing: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Rewind to the start and begin playing
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        !self.playing && self.elapsed_ms >= self.duration_ms as f32
    }

    /// Linear progress through the duration, 0.0..=1.0
    pub fn raw_progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Eased progress, 0.0..=1.0
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.raw_progress())
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
        }
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(DEFAULT_TWEEN_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_finished() {
        let tween = Tween::default();
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_runs_to_completion() {
        let mut tween = Tween::new(100).with_easing(Easing::Linear);
        tween.restart();
        assert_eq!(tween.progress(), 0.0);

        tween.tick(50.0);
        assert!((tween.progress() - 0.5).abs() < 1e-6);
        assert!(tween.is_playing());

        tween.tick(60.0);
        assert_eq!(tween.progress(), 1.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_restart_mid_flight() {
        let mut tween = Tween::new(100).with_easing(Easing::Linear);
        tween.restart();
        tween.tick(80.0);
        tween.restart();
        assert_eq!(tween.progress(), 0.0);
        assert!(tween.is_playing());
    }

    #[test]
    fn test_tick_when_stopped_is_noop() {
        let mut tween = Tween::new(100);
        tween.tick(5000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.raw_progress(), 1.0);
    }
}
