//! Container element builder
//!
//! Fluent builder for layout containers:
//! ```
//! use motif_layout::prelude::*;
//! use motif_core::Color;
//!
//! let ui = div()
//!     .flex_col()
//!     .items_center()
//!     .gap(16.0)
//!     .child(div().square(64.0).bg(Color::BLUE));
//! ```

use motif_core::Color;

use crate::tree::{ElementBuilder, Node, NodeId, NodeKind, RenderTree};

/// Create a new container element
pub fn div() -> Div {
    Div::new()
}

/// A container element builder
pub struct Div {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<Color>,
    corner_radius: f32,
    gap: f32,
    padding: f32,
    opacity: f32,
    scale_y: f32,
    align_center: bool,
    clip: bool,
    tag: Option<&'static str>,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl Default for Div {
    fn default() -> Self {
        Self::new()
    }
}

impl Div {
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            background: None,
            corner_radius: 0.0,
            gap: 0.0,
            padding: 0.0,
            opacity: 1.0,
            scale_y: 1.0,
            align_center: false,
            clip: false,
            tag: None,
            children: Vec::new(),
        }
    }

    /// Set a fixed width
    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a fixed height
    pub fn h(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set equal fixed width and height
    pub fn square(self, side: f32) -> Self {
        self.w(side).h(side)
    }

    /// Set the background color
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Round the corners
    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Vertical gap between children
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Uniform padding
    pub fn p(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Node opacity (composited with ancestors)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Vertical scale on the computed height (visibility expand/shrink)
    pub fn scale_y(mut self, scale: f32) -> Self {
        self.scale_y = scale.max(0.0);
        self
    }

    /// Stack children vertically (the default flow)
    pub fn flex_col(self) -> Self {
        self
    }

    /// Center children horizontally
    pub fn items_center(mut self) -> Self {
        self.align_center = true;
        self
    }

    /// Clip content to the container bounds
    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }

    /// Tag this node for lookup in queries and event dispatch
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Append a child element
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a child if present (animated visibility produces `None` once
    /// the exit animation completes)
    pub fn child_opt(self, child: Option<impl ElementBuilder + 'static>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }
}

impl ElementBuilder for Div {
    fn build(&self, tree: &mut RenderTree, parent: Option<NodeId>) -> NodeId {
        let mut node = Node::new(NodeKind::Container);
        node.width = self.width;
        node.height = self.height;
        node.background = self.background;
        node.corner_radius = self.corner_radius;
        node.gap = self.gap;
        node.padding = self.padding;
        node.opacity = self.opacity;
        node.scale_y = self.scale_y;
        node.align_center = self.align_center;
        node.clip = self.clip;
        node.tag = self.tag;

        let id = tree.insert(node, parent);
        for child in &self.children {
            child.build(tree, Some(id));
        }
        id
    }
}
