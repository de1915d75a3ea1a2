//! Motif Animation Basics
//!
//! Five independent, non-interacting demos, each a pure function of one piece
//! of two-valued local state:
//!
//! 1. **Color** - a boolean selects blue or red; the displayed color tweens
//! 2. **Box transition** - a two-valued mode drives color and size together,
//!    with a different spring per transition direction
//! 3. **Visibility** - a boolean mounts/unmounts a square with animated
//!    enter/exit
//! 4. **Content size** - a boolean caps the paragraph at three lines; the
//!    container's bounds spring to the new content
//! 5. **Crossfade** - a two-valued scene dissolves between a label and an
//!    icon
//!
//! Each demo owns its state, exposes `view()` building the element tree with
//! a wired button, and mutates state only inside that button's synchronous
//! click handler. [`app::DemoApp`] is the host container that picks a demo
//! and runs the headless frame loop.

pub mod app;
pub mod demos;

pub use app::{DemoApp, DemoError, DemoScreen};
pub use demos::{
    BoxState, BoxTransitionDemo, ColorDemo, ContentSizeDemo, CrossfadeDemo, DemoScene,
    VisibilityDemo,
};

/// Side length of the demo squares, shared by several demos
pub const SQUARE_SIZE: f32 = 64.0;

/// Width the demos lay out against
pub const DEMO_WIDTH: f32 = 400.0;
