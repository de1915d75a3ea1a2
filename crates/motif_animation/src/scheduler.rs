//! Animation scheduler
//!
//! Owns every active animation and steps them each frame. Animations are
//! registered implicitly when created through wrapper types:
//! - `AnimatedValue` - spring-driven float
//! - `AnimatedColor` - tween-driven color
//!
//! The host frame loop calls `tick()` (wall-clock) or `advance(dt)` (explicit
//! step, used by tests and the headless harness); this module never spawns
//! its own threads or frames. Wrappers hold a `SchedulerHandle`, a weak
//! reference, so a dropped scheduler simply freezes values at their last
//! target.

use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;
use crate::values::Interpolate;
use motif_core::Color;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered spring animation
    pub struct SpringId;
    /// Handle to a registered tween animation
    pub struct TweenId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    tweens: SlotMap<TweenId, Tween>,
    last_frame: Instant,
}

/// The animation scheduler that ticks all active animations
///
/// Typically held by the application context and shared with components via
/// `SchedulerHandle`.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                tweens: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Step every animation by an explicit `dt` in seconds
    ///
    /// Returns true if any animations are still active (need another frame).
    /// This is the deterministic entry point used by the headless harness
    /// and tests.
    pub fn advance(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        let dt_ms = dt * 1000.0;

        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, tween) in inner.tweens.iter_mut() {
            tween.tick(dt_ms);
        }

        // Animations are removed only when their wrapper drops, so a settled
        // spring can be retargeted and run again.
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Step every animation by the wall-clock time since the last tick
    pub fn tick(&self) -> bool {
        let dt = {
            let inner = self.inner.lock().unwrap();
            inner.last_frame.elapsed().as_secs_f32()
        };
        self.advance(dt)
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AnimationScheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A weak, cloneable handle to the scheduler
///
/// Wrapper types hold one of these. Every operation is a no-op returning
/// `None`/default once the scheduler is gone, so components outliving the
/// host loop degrade to their last target value instead of panicking.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle to nothing; every registration fails softly
    ///
    /// Useful for components constructed before a host exists.
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        match self.inner.upgrade() {
            Some(inner) => Some(inner.lock().unwrap().springs.insert(spring)),
            None => {
                tracing::warn!("spring registration dropped: scheduler is gone");
                None
            }
        }
    }

    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        let inner = self.inner.upgrade()?;
        let guard = inner.lock().unwrap();
        guard.springs.get(id).map(|s| s.value())
    }

    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().unwrap().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    pub fn set_spring_config(&self, id: SpringId, config: SpringConfig) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().unwrap().springs.get_mut(id) {
                spring.set_config(config);
            }
        }
    }

    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner
                .lock()
                .unwrap()
                .springs
                .get(id)
                .map(|s| s.is_settled())
                .unwrap_or(true),
            None => true,
        }
    }

    pub fn remove_spring(&self, id: SpringId) -> Option<Spring> {
        let inner = self.inner.upgrade()?;
        let spring = inner.lock().unwrap().springs.remove(id);
        spring
    }

    pub fn register_tween(&self, tween: Tween) -> Option<TweenId> {
        match self.inner.upgrade() {
            Some(inner) => Some(inner.lock().unwrap().tweens.insert(tween)),
            None => {
                tracing::warn!("tween registration dropped: scheduler is gone");
                None
            }
        }
    }

    pub fn restart_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(tween) = inner.lock().unwrap().tweens.get_mut(id) {
                tween.restart();
            }
        }
    }

    /// Eased progress of a tween, or None if it no longer exists
    pub fn tween_progress(&self, id: TweenId) -> Option<f32> {
        let inner = self.inner.upgrade()?;
        let guard = inner.lock().unwrap();
        guard.tweens.get(id).map(|t| t.progress())
    }

    pub fn tween_is_playing(&self, id: TweenId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner
                .lock()
                .unwrap()
                .tweens
                .get(id)
                .map(|t| t.is_playing())
                .unwrap_or(false),
            None => false,
        }
    }

    pub fn remove_tween(&self, id: TweenId) -> Option<Tween> {
        let inner = self.inner.upgrade()?;
        let tween = inner.lock().unwrap().tweens.remove(id);
        tween
    }
}

// ============================================================================
// Animated Value
// ============================================================================

/// A spring-driven float that registers itself with the scheduler
///
/// The spring is created lazily on the first retarget and removed when the
/// value is dropped.
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    /// Last known value when no spring is registered
    current: f32,
    /// The target value we're animating towards
    target: f32,
}

impl AnimatedValue {
    /// Create a new animated value with the given initial value
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Create with the default spring config (stiff)
    pub fn with_default(handle: SchedulerHandle, initial: f32) -> Self {
        Self::new(handle, initial, SpringConfig::default())
    }

    /// Swap the spring curve; takes effect on the current motion immediately
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
        if let Some(id) = self.spring_id {
            self.handle.set_spring_config(id, config);
        }
    }

    /// Set the target value - starts animating if it differs from the current
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.set_spring_target(id, target);
        } else if (target - self.current).abs() > 0.001 {
            let spring = Spring::new(self.config, self.current);
            if let Some(id) = self.handle.register_spring(spring) {
                self.spring_id = Some(id);
                self.handle.set_spring_target(id, target);
            }
        }
    }

    /// Get the current animated value
    ///
    /// A settled spring reports the exact target so resting presentation
    /// never sits at the settle epsilon.
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) if self.handle.is_spring_settled(id) => self.target,
            Some(id) => self.handle.get_spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Set the value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if the spring is still moving toward its target
    pub fn is_animating(&self) -> bool {
        match self.spring_id {
            Some(id) => !self.handle.is_spring_settled(id),
            None => false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

// ============================================================================
// Animated Color
// ============================================================================

/// A tween-driven color that registers itself with the scheduler
///
/// Color changes run over the default eased duration. Retargeting mid-flight
/// restarts the tween from the currently displayed color, so an interrupted
/// animation never jumps.
pub struct AnimatedColor {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    tween: Tween,
    from: Color,
    to: Color,
}

impl AnimatedColor {
    /// Create a new animated color with the default duration and easing
    pub fn new(handle: SchedulerHandle, initial: Color) -> Self {
        Self {
            handle,
            tween_id: None,
            tween: Tween::default(),
            from: initial,
            to: initial,
        }
    }

    /// Override the tween used for subsequent color changes
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tween = tween;
        self
    }

    /// Set the target color - starts a tween if it differs from the target
    pub fn set_target(&mut self, target: Color) {
        if target == self.to {
            return;
        }
        self.from = self.get();
        self.to = target;

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

    /// Get the currently displayed color
    pub fn get(&self) -> Color {
        match self.tween_id {
            Some(id) => {
                let t = self.handle.tween_progress(id).unwrap_or(1.0);
                self.from.lerp(&self.to, t)
            }
            None => self.to,
        }
    }

    /// Check if a color change is still in flight
    pub fn is_animating(&self) -> bool {
        match self.tween_id {
            Some(id) => self.handle.tween_is_playing(id),
            None => false,
        }
    }

    pub fn target(&self) -> Color {
        self.to
    }
}

impl Drop for AnimatedColor {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}
