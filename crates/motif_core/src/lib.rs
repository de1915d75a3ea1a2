//! Motif Core
//!
//! Foundational types shared by the Motif demo stack:
//!
//! - **Color**: premultiplied-free RGBA color with interpolation
//! - **Geometry**: points, sizes, and rectangles in logical pixels
//! - **State**: cheap-to-clone shared cell for component-local UI state

pub mod color;
pub mod geometry;
pub mod state;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use state::State;
