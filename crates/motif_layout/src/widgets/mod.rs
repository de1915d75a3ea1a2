//! Ready-to-use widgets

pub mod button;

pub use button::{button, Button, ButtonConfig};
