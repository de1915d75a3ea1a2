//! Ready-to-use button widget
//!
//! Inherits all `Div` methods through `Deref`, so layout tweaks compose with
//! the fluent API:
//!
//! ```
//! use motif_layout::prelude::*;
//!
//! let b = button("Change Color").on_click(|| println!("pressed"));
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use motif_core::Color;

use crate::div::{div, Div};
use crate::text::text;
use crate::tree::{ElementBuilder, EventCallback, NodeId, RenderTree};

/// Button styling
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    pub bg_color: Color,
    pub text_color: Color,
    pub font_size: f32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            bg_color: Color::from_hex(0x6200EE),
            text_color: Color::WHITE,
            font_size: 14.0,
        }
    }
}

/// Create a button with the given label
///
/// Buttons default to the pill shape the demos use everywhere.
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

/// A clickable button element
pub struct Button {
    inner: Div,
    label: String,
    config: ButtonConfig,
    on_click: Option<EventCallback>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        let config = ButtonConfig::default();
        let inner = div()
            .p(12.0)
            .rounded(20.0)
            .items_center()
            .bg(config.bg_color);
        Self {
            inner,
            label: label.into(),
            config,
            on_click: None,
        }
    }

    /// Set the click handler; it runs synchronously on dispatch
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn config(mut self, config: ButtonConfig) -> Self {
        self.inner = std::mem::take(&mut self.inner).bg(config.bg_color);
        self.config = config;
        self
    }
}

impl Deref for Button {
    type Target = Div;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Button {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// Forward the Div builder methods that return Self by value.
impl Button {
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.inner = std::mem::take(&mut self.inner).tag(tag);
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.inner = std::mem::take(&mut self.inner).w(width);
        self
    }
}

impl ElementBuilder for Button {
    fn build(&self, tree: &mut RenderTree, parent: Option<NodeId>) -> NodeId {
        let id = self.inner.build(tree, parent);
        text(self.label.clone())
            .size(self.config.font_size)
            .color(self.config.text_color)
            .build(tree, Some(id));
        if let Some(handler) = &self.on_click {
            tree.register_handler(id, Arc::clone(handler));
        }
        id
    }
}
