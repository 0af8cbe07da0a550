//! Tree nodes.

use geom::Rect;

use crate::core::id::NodeId;
use crate::core::state::NodeName;
use crate::widget::{Widget, WidgetKind};

/// A node in the widget tree: a widget plus the structural state the
/// core tracks for it.
///
/// The widget itself lives in an `Option` slot so it can be taken out
/// while it runs, letting widget code call back into the tree without
/// aliasing itself.
pub struct Node {
    pub(crate) widget: Option<Box<dyn Widget>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) rect: Option<Rect>,
    pub(crate) kind: WidgetKind,
    pub(crate) name: NodeName,
    pub(crate) user_id: Option<String>,
    pub(crate) mounted: bool,
}

impl Node {
    pub(crate) fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            kind: widget.kind(),
            name: widget.name(),
            widget: Some(widget),
            parent: None,
            children: Vec::new(),
            rect: None,
            user_id: None,
            mounted: false,
        }
    }

    /// The parent node, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in z-order, back to front.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The rect committed by the last layout pass, in parent space.
    /// `None` until the node has been laid out.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// The widget kind recorded when the node was created.
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// The node's name, for logs and dumps.
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// The user-assigned id, if one was set.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("rect", &self.rect)
            .field("children", &self.children.len())
            .finish()
    }
}
