//! Text element builder
//!
//! ```
//! use motif_layout::prelude::*;
//!
//! let label = text("Hello, World!").size(16.0).max_lines(3);
//! ```

use motif_core::Color;

use crate::tree::{ElementBuilder, Node, NodeId, NodeKind, RenderTree};

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Justify,
}

/// Create a new text element
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// A text element builder
pub struct Text {
    content: String,
    font_size: f32,
    color: Color,
    max_lines: Option<usize>,
    align: TextAlign,
    tag: Option<&'static str>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            color: Color::BLACK,
            max_lines: None,
            align: TextAlign::Left,
            tag: None,
        }
    }

    /// Set the font size in logical pixels
    pub fn size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Cap the number of rendered lines; overflow is clipped by layout
    pub fn max_lines(mut self, cap: usize) -> Self {
        self.max_lines = Some(cap);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl ElementBuilder for Text {
    fn build(&self, tree: &mut RenderTree, parent: Option<NodeId>) -> NodeId {
        let mut node = Node::new(NodeKind::Text {
            content: self.content.clone(),
            font_size: self.font_size,
            color: self.color,
            align: self.align,
            max_lines: self.max_lines,
        });
        node.tag = self.tag;
        tree.insert(node, parent)
    }
}
