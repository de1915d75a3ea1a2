//! The five demos

pub mod box_transition;
pub mod color;
pub mod content_size;
pub mod crossfade;
pub mod visibility;

pub use box_transition::{BoxState, BoxTransitionDemo};
pub use color::ColorDemo;
pub use content_size::ContentSizeDemo;
pub use crossfade::{CrossfadeDemo, DemoScene};
pub use visibility::VisibilityDemo;
