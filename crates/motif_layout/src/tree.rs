//! Render tree
//!
//! Elements build into a `RenderTree`: a slotmap of nodes with resolved
//! bounds, background, opacity, and text metrics. Layout is a single
//! vertical-flow pass — children stack top to bottom with gaps, text height
//! comes from its visible line count — which is all the demos need. Click
//! handlers registered by widgets dispatch synchronously through
//! [`RenderTree::click_tag`].

use motif_core::{Color, Point, Rect, Size};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

use crate::icon::IconGlyph;
use crate::text::TextAlign;

new_key_type! {
    /// Handle to a node in the render tree
    pub struct NodeId;
}

/// Callback invoked when a node is clicked
pub type EventCallback = Arc<dyn Fn() + Send + Sync>;

/// Errors from tree queries and event dispatch
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("no element tagged `{0}`")]
    TagNotFound(&'static str),

    #[error("element tagged `{0}` has no click handler")]
    NoHandler(&'static str),
}

/// Approximate glyph advance as a fraction of font size
const CHAR_WIDTH_FACTOR: f32 = 0.5;
/// Line height as a fraction of font size
const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// What a node renders as
#[derive(Clone, Debug)]
pub enum NodeKind {
    Container,
    Text {
        content: String,
        font_size: f32,
        color: Color,
        align: TextAlign,
        max_lines: Option<usize>,
    },
    Icon {
        glyph: IconGlyph,
        size: f32,
    },
}

/// A node in the render tree
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub children: SmallVec<[NodeId; 4]>,
    pub background: Option<Color>,
    pub opacity: f32,
    /// Vertical scale applied to the node's computed height (visibility
    /// expand/shrink)
    pub scale_y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub gap: f32,
    pub padding: f32,
    pub corner_radius: f32,
    pub align_center: bool,
    pub clip: bool,
    pub tag: Option<&'static str>,
    /// Resolved by `compute_layout`
    pub bounds: Rect,
    /// Lines actually rendered (text nodes, resolved by layout)
    pub visible_lines: usize,
    /// Lines the content would need without a cap
    pub total_lines: usize,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: SmallVec::new(),
            background: None,
            opacity: 1.0,
            scale_y: 1.0,
            width: None,
            height: None,
            gap: 0.0,
            padding: 0.0,
            corner_radius: 0.0,
            align_center: false,
            clip: false,
            tag: None,
            bounds: Rect::default(),
            visible_lines: 0,
            total_lines: 0,
        }
    }
}

/// Trait for anything that can build itself into the render tree
pub trait ElementBuilder {
    /// Insert this element (and its children) under `parent`
    fn build(&self, tree: &mut RenderTree, parent: Option<NodeId>) -> NodeId;
}

/// A built element tree with resolved layout
pub struct RenderTree {
    nodes: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
    handlers: FxHashMap<NodeId, EventCallback>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            handlers: FxHashMap::default(),
        }
    }

    /// Build a tree from a root element and compute layout at `max_width`
    pub fn from_element(element: &dyn ElementBuilder, max_width: f32) -> Self {
        let mut tree = Self::new();
        let root = element.build(&mut tree, None);
        tree.root = Some(root);
        tree.compute_layout(max_width);
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn insert(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.insert(node);
        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.push(id);
                }
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }
        id
    }

    pub(crate) fn register_handler(&mut self, id: NodeId, callback: EventCallback) {
        self.handlers.insert(id, callback);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Resolve bounds for every node, flowing children vertically
    pub fn compute_layout(&mut self, max_width: f32) {
        if let Some(root) = self.root {
            self.layout_node(root, Point::ZERO, max_width);
        }
    }

    fn layout_node(&mut self, id: NodeId, origin: Point, max_width: f32) -> Size {
        let (kind, explicit_w, explicit_h, gap, padding, scale_y, align_center, children) = {
            let node = &self.nodes[id];
            (
                node.kind.clone(),
                node.width,
                node.height,
                node.gap,
                node.padding,
                node.scale_y,
                node.align_center,
                node.children.clone(),
            )
        };

        let size = match kind {
            NodeKind::Text {
                ref content,
                font_size,
                max_lines,
                ..
            } => {
                let avail = explicit_w.unwrap_or(max_width).max(font_size);
                let char_w = font_size * CHAR_WIDTH_FACTOR;
                let chars_per_line = ((avail / char_w).floor() as usize).max(1);
                let total_lines = content.chars().count().div_ceil(chars_per_line).max(1);
                let visible_lines = match max_lines {
                    Some(cap) => total_lines.min(cap),
                    None => total_lines,
                };
                {
                    let node = &mut self.nodes[id];
                    node.visible_lines = visible_lines;
                    node.total_lines = total_lines;
                }

                let line_h = font_size * LINE_HEIGHT_FACTOR;
                let content_w = (content.chars().count() as f32 * char_w).min(avail);
                Size::new(
                    explicit_w.unwrap_or(content_w),
                    explicit_h.unwrap_or(visible_lines as f32 * line_h),
                )
            }
            NodeKind::Icon { size, .. } => Size::new(
                explicit_w.unwrap_or(size),
                explicit_h.unwrap_or(size),
            ),
            NodeKind::Container => {
                let inner_max = (explicit_w.unwrap_or(max_width) - 2.0 * padding).max(0.0);
                let inner_origin = Point::new(origin.x + padding, origin.y + padding);

                let mut cursor_y = inner_origin.y;
                let mut content_w: f32 = 0.0;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        cursor_y += gap;
                    }
                    let child_size =
                        self.layout_node(*child, Point::new(inner_origin.x, cursor_y), inner_max);
                    cursor_y += child_size.height;
                    content_w = content_w.max(child_size.width);
                }
                let content_h = cursor_y - inner_origin.y;

                let w = explicit_w.unwrap_or(content_w + 2.0 * padding);
                let h = explicit_h.unwrap_or(content_h + 2.0 * padding) * scale_y;

                if align_center {
                    for child in &children {
                        let child_w = self.nodes[*child].bounds.size.width;
                        let shift = ((w - 2.0 * padding - child_w) / 2.0).max(0.0);
                        self.shift_subtree_x(*child, shift);
                    }
                }

                Size::new(w, h)
            }
        };

        self.nodes[id].bounds = Rect::new(origin, size);
        size
    }

    fn shift_subtree_x(&mut self, id: NodeId, dx: f32) {
        if dx == 0.0 {
            return;
        }
        self.nodes[id].bounds.origin.x += dx;
        let children = self.nodes[id].children.clone();
        for child in children {
            self.shift_subtree_x(child, dx);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Find the first node carrying `tag` (depth-first from the root)
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        let root = self.root?;
        self.find_in_subtree(root, tag)
    }

    fn find_in_subtree(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if node.tag == Some(tag) {
            return Some(id);
        }
        node.children
            .iter()
            .find_map(|child| self.find_in_subtree(*child, tag))
    }

    pub fn bounds(&self, id: NodeId) -> Rect {
        self.nodes.get(id).map(|n| n.bounds).unwrap_or_default()
    }

    pub fn background(&self, id: NodeId) -> Option<Color> {
        self.nodes.get(id).and_then(|n| n.background)
    }

    /// Opacity of a node with every ancestor's opacity multiplied in
    pub fn effective_opacity(&self, id: NodeId) -> f32 {
        // Accumulate along the root-to-node path.
        self.path_to(id)
            .iter()
            .map(|step| self.nodes[*step].opacity)
            .product()
    }

    fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        fn walk(
            tree: &RenderTree,
            id: NodeId,
            target: NodeId,
            path: &mut Vec<NodeId>,
        ) -> bool {
            path.push(id);
            if id == target {
                return true;
            }
            if let Some(node) = tree.nodes.get(id) {
                for child in &node.children {
                    if walk(tree, *child, target, path) {
                        return true;
                    }
                }
            }
            path.pop();
            false
        }

        let mut path = Vec::new();
        if let Some(root) = self.root {
            walk(self, root, target, &mut path);
        }
        path
    }

    /// Lines actually rendered for a text node
    pub fn text_visible_lines(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id)?;
        matches!(node.kind, NodeKind::Text { .. }).then_some(node.visible_lines)
    }

    /// Lines the text would occupy without a cap
    pub fn text_total_lines(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id)?;
        matches!(node.kind, NodeKind::Text { .. }).then_some(node.total_lines)
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Invoke the click handler on the subtree rooted at `tag`
    ///
    /// The handler runs synchronously before this returns; state mutated by
    /// it is visible to the caller immediately.
    pub fn click_tag(&self, tag: &'static str) -> Result<(), LayoutError> {
        let id = self
            .find_by_tag(tag)
            .ok_or(LayoutError::TagNotFound(tag))?;
        let handler = self
            .handler_in_subtree(id)
            .ok_or(LayoutError::NoHandler(tag))?;
        tracing::debug!(tag, "dispatching click");
        handler();
        Ok(())
    }

    fn handler_in_subtree(&self, id: NodeId) -> Option<EventCallback> {
        if let Some(handler) = self.handlers.get(&id) {
            return Some(Arc::clone(handler));
        }
        let node = self.nodes.get(id)?;
        node.children
            .iter()
            .find_map(|child| self.handler_in_subtree(*child))
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure an element's intrinsic size without keeping the tree
pub fn measure(element: &dyn ElementBuilder, max_width: f32) -> Size {
    let tree = RenderTree::from_element(element, max_width);
    match tree.root() {
        Some(root) => tree.bounds(root).size,
        None => Size::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;
    use crate::text::text;

    #[test]
    fn test_vertical_flow_with_gap() {
        let ui = div()
            .gap(10.0)
            .child(div().square(20.0))
            .child(div().square(30.0));
        let tree = RenderTree::from_element(&ui, 400.0);

        let root = tree.root().unwrap();
        let bounds = tree.bounds(root);
        assert_eq!(bounds.size.height, 60.0);
        assert_eq!(bounds.size.width, 30.0);
    }

    #[test]
    fn test_padding_inflates_container() {
        let ui = div().p(16.0).child(div().square(32.0));
        let tree = RenderTree::from_element(&ui, 400.0);
        let bounds = tree.bounds(tree.root().unwrap());
        assert_eq!(bounds.size.width, 64.0);
        assert_eq!(bounds.size.height, 64.0);
    }

    #[test]
    fn test_text_line_cap() {
        // 16px font at 400px width fits 50 chars per line; 120 chars need 3
        // lines but the cap keeps it at 2.
        let long = "x".repeat(120);
        let ui = text(long.clone()).size(16.0).max_lines(2).tag("t");
        let tree = RenderTree::from_element(&ui, 400.0);
        let id = tree.find_by_tag("t").unwrap();
        assert_eq!(tree.text_total_lines(id), Some(3));
        assert_eq!(tree.text_visible_lines(id), Some(2));

        let uncapped = text(long).size(16.0).tag("t");
        let tree = RenderTree::from_element(&uncapped, 400.0);
        let id = tree.find_by_tag("t").unwrap();
        assert_eq!(tree.text_visible_lines(id), Some(3));
    }

    #[test]
    fn test_text_height_tracks_visible_lines() {
        let long = "x".repeat(120);
        let capped = text(long.clone()).size(16.0).max_lines(1);
        let free = text(long).size(16.0);
        let capped_h = measure(&capped, 400.0).height;
        let free_h = measure(&free, 400.0).height;
        assert!(free_h > capped_h * 2.0);
    }

    #[test]
    fn test_find_by_tag_depth_first() {
        let ui = div().child(div().tag("inner").child(div().tag("deep")));
        let tree = RenderTree::from_element(&ui, 100.0);
        assert!(tree.find_by_tag("inner").is_some());
        assert!(tree.find_by_tag("deep").is_some());
        assert!(tree.find_by_tag("missing").is_none());
    }

    #[test]
    fn test_effective_opacity_multiplies_ancestors() {
        let ui = div()
            .opacity(0.5)
            .child(div().opacity(0.5).tag("leaf"));
        let tree = RenderTree::from_element(&ui, 100.0);
        let leaf = tree.find_by_tag("leaf").unwrap();
        assert!((tree.effective_opacity(leaf) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_scale_y_shrinks_height() {
        let ui = div().scale_y(0.5).child(div().square(40.0));
        let tree = RenderTree::from_element(&ui, 100.0);
        assert_eq!(tree.bounds(tree.root().unwrap()).size.height, 20.0);
    }

    #[test]
    fn test_click_tag_errors() {
        let ui = div().tag("plain");
        let tree = RenderTree::from_element(&ui, 100.0);
        assert!(matches!(
            tree.click_tag("nope"),
            Err(LayoutError::TagNotFound("nope"))
        ));
        assert!(matches!(
            tree.click_tag("plain"),
            Err(LayoutError::NoHandler("plain"))
        ));
    }
}
