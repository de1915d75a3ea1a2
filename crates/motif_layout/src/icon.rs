//! Icon element builder

use crate::tree::{ElementBuilder, Node, NodeId, NodeKind, RenderTree};

/// Built-in icon glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    Phone,
}

/// Create a new icon element
pub fn icon(glyph: IconGlyph) -> Icon {
    Icon::new(glyph)
}

/// An icon element builder
pub struct Icon {
    glyph: IconGlyph,
    size: f32,
    tag: Option<&'static str>,
}

impl Icon {
    pub fn new(glyph: IconGlyph) -> Self {
        Self {
            glyph,
            size: 24.0,
            tag: None,
        }
    }

    /// Set the icon's square side length
    pub fn square(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl ElementBuilder for Icon {
    fn build(&self, tree: &mut RenderTree, parent: Option<NodeId>) -> NodeId {
        let mut node = Node::new(NodeKind::Icon {
            glyph: self.glyph,
            size: self.size,
        });
        node.tag = self.tag;
        tree.insert(node, parent)
    }
}
