//! Motif Animation Engine
//!
//! Spring physics and timed tweens behind a frame scheduler.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: fixed-duration eased progress animations
//! - **Typed Interpolation**: `Interpolate` for floats and colors
//! - **Interruptible**: springs inherit velocity when retargeted, tweens
//!   restart from the currently displayed value
//! - **Transitions**: state-driven animation of several properties at once,
//!   with spring curves chosen per target state
//! - **Deterministic stepping**: `AnimationScheduler::advance(dt)` drives
//!   every registered animation by an explicit time step, which is also how
//!   the tests run the engine

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod transition;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimatedColor, AnimatedValue, AnimationScheduler, SchedulerHandle, SpringId, TweenId,
};
pub use spring::{Spring, SpringConfig};
pub use transition::{ColorTrackId, FloatTrackId, Transition};
pub use tween::{Tween, DEFAULT_TWEEN_MS};
pub use values::Interpolate;
