//! Motif Layout
//!
//! Headless element tree with a fluent builder API.
//!
//! # Example
//!
//! ```
//! use motif_layout::prelude::*;
//! use motif_core::Color;
//!
//! let ui = div()
//!     .flex_col()
//!     .items_center()
//!     .gap(16.0)
//!     .child(button("Change Color").tag("change"))
//!     .child(div().square(64.0).bg(Color::BLUE).tag("square"));
//!
//! let tree = RenderTree::from_element(&ui, 400.0);
//! assert!(tree.find_by_tag("square").is_some());
//! ```
//!
//! Elements build into a [`RenderTree`] with resolved bounds; a simple
//! vertical-flow pass stands in for a full layout engine. The animated
//! containers ([`AnimatedVisibility`], [`Crossfade`], [`ContentSize`]) hold
//! their animation state across rebuilds and are driven by the
//! `motif_animation` scheduler.

pub mod content_size;
pub mod crossfade;
pub mod div;
pub mod icon;
pub mod text;
pub mod tree;
pub mod visibility;
pub mod widgets;

pub use content_size::ContentSize;
pub use crossfade::Crossfade;
pub use div::{div, Div};
pub use icon::{icon, Icon, IconGlyph};
pub use text::{text, Text, TextAlign};
pub use tree::{
    measure, ElementBuilder, EventCallback, LayoutError, Node, NodeId, NodeKind, RenderTree,
};
pub use visibility::AnimatedVisibility;
pub use widgets::{button, Button, ButtonConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::content_size::ContentSize;
    pub use crate::crossfade::Crossfade;
    pub use crate::div::{div, Div};
    pub use crate::icon::{icon, Icon, IconGlyph};
    pub use crate::text::{text, Text, TextAlign};
    pub use crate::tree::{
        measure, ElementBuilder, EventCallback, LayoutError, NodeId, RenderTree,
    };
    pub use crate::visibility::AnimatedVisibility;
    pub use crate::widgets::{button, Button, ButtonConfig};

    // Re-export animation types for convenience
    pub use motif_animation::{
        AnimatedColor, AnimatedValue, AnimationScheduler, Easing, SchedulerHandle, SpringConfig,
        Transition, Tween,
    };
}
