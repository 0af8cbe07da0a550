//! Context types handed to widget methods.
//!
//! Each phase of the frame gets its own view of the tree: [`Ctx`] for
//! event handlers that may restructure the tree, [`LayoutCtx`] for the
//! layout recursion, [`HitCtx`] for hit testing, and [`DrawCtx`] for
//! painting. A widget runs with its own slot taken out of the arena,
//! so none of these can reach the widget that is currently executing.

use geom::{Expanse, Point, Rect};

use crate::core::error::Result;
use crate::core::event::Signal;
use crate::core::id::NodeId;
use crate::core::interaction::InteractionContext;
use crate::core::layout::Constraint;
use crate::core::world::Core;
use crate::widget::{Widget, WidgetKind};

/// The mutable tree view given to event handlers and `on_mount`.
pub struct Ctx<'a> {
    core: &'a mut Core,
    id: NodeId,
}

impl<'a> Ctx<'a> {
    pub(crate) fn new(core: &'a mut Core, id: NodeId) -> Self {
        Self { core, id }
    }

    /// The node this widget occupies.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// Direct access to the tree.
    pub fn core(&mut self) -> &mut Core {
        self.core
    }

    /// This node's children, in z-order.
    pub fn children(&self) -> Vec<NodeId> {
        self.core.children(self.id).to_vec()
    }

    /// The committed rect of a node, if it has been laid out.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.core.rect(id)
    }

    /// Add a widget as the last child of this node.
    pub fn add_child(&mut self, w: impl Widget) -> Result<NodeId> {
        self.core.add_child(self.id, w)
    }

    /// Add a widget as the last child of an arbitrary node.
    pub fn add_child_to(&mut self, parent: NodeId, w: impl Widget) -> Result<NodeId> {
        self.core.add_child(parent, w)
    }

    /// Remove a node and its whole subtree.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<()> {
        self.core.remove_subtree(id)
    }

    /// Remove all children of a node.
    pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
        self.core.clear_children(id)
    }

    /// Register a user-visible id for a node.
    pub fn set_id(&mut self, id: NodeId, user_id: impl Into<String>) -> Result<()> {
        self.core.set_id(id, user_id)
    }

    /// Emit a signal from this widget. It will bubble from this node's
    /// parent towards the root once the current event finishes.
    pub fn emit(&mut self, signal: Signal) {
        self.core.emit(self.id, signal);
    }

    /// Run a closure against another node's widget, downcast to its
    /// concrete type.
    pub fn with_widget<T: Widget, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T, &mut Ctx) -> R,
    ) -> Result<R> {
        self.core.with_widget(id, f)
    }
}

/// The view given to [`Widget::layout`].
pub struct LayoutCtx<'a> {
    core: &'a mut Core,
    interaction: &'a InteractionContext,
    id: NodeId,
}

impl<'a> LayoutCtx<'a> {
    pub(crate) fn new(
        core: &'a mut Core,
        interaction: &'a InteractionContext,
        id: NodeId,
    ) -> Self {
        Self {
            core,
            interaction,
            id,
        }
    }

    /// The node being laid out.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// This node's children, in z-order.
    pub fn children(&self) -> Vec<NodeId> {
        self.core.children(self.id).to_vec()
    }

    /// Recurse into a child. The child resolves and commits its rect,
    /// which is returned in this widget's coordinate space. If the
    /// child is being dragged its committed position is overridden by
    /// the drag, and the returned rect reflects that.
    pub fn layout_child(&mut self, child: NodeId, c: Constraint) -> Result<Rect> {
        self.core.layout_node(child, &c, self.interaction)
    }
}

/// The read-only view given to [`Widget::hit_test`].
pub struct HitCtx<'a> {
    core: &'a Core,
    id: NodeId,
}

impl<'a> HitCtx<'a> {
    pub(crate) fn new(core: &'a Core, id: NodeId) -> Self {
        Self { core, id }
    }

    /// The node being tested.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// This node's committed rect, in parent space.
    pub fn rect(&self) -> Option<Rect> {
        self.core.rect(self.id)
    }

    /// This node's children, in z-order.
    pub fn children(&self) -> &'a [NodeId] {
        self.core.children(self.id)
    }

    /// Recurse into a child. `p` must be in this widget's own
    /// coordinate space. Children without a committed rect are never
    /// hit.
    pub fn hit_child(&self, child: NodeId, p: Point) -> Option<NodeId> {
        self.core.hit_node(child, p)
    }

    /// The standard container test: try children in order, first match
    /// wins; fall back to this widget's own interior. The probe is
    /// translated into this widget's space before recursing.
    pub fn hit_children_first(&self, p: Point) -> Option<NodeId> {
        let rect = self.rect()?;
        let local = p - rect.origin();
        for child in self.children() {
            if let Some(hit) = self.hit_child(*child, local) {
                return Some(hit);
            }
        }
        rect.contains_open(p).then(|| self.node_id())
    }
}

/// The read-only view given to [`Widget::draw`].
pub struct DrawCtx<'a> {
    core: &'a Core,
    interaction: &'a InteractionContext,
    id: NodeId,
}

impl<'a> DrawCtx<'a> {
    pub(crate) fn new(
        core: &'a Core,
        interaction: &'a InteractionContext,
        id: NodeId,
    ) -> Self {
        Self {
            core,
            interaction,
            id,
        }
    }

    /// The node being painted.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// The widget's committed size.
    pub fn size(&self) -> Expanse {
        self.core
            .rect(self.id)
            .map(Expanse::from)
            .unwrap_or_default()
    }

    /// The kind of an arbitrary node, if it is alive.
    pub fn kind(&self, id: NodeId) -> Option<WidgetKind> {
        self.core.kind(id)
    }

    /// True if the pointer is currently over this widget.
    pub fn is_hot(&self) -> bool {
        self.interaction.hot == Some(self.id)
    }

    /// True if this widget is the active (focused) widget.
    pub fn is_active(&self) -> bool {
        self.interaction.active == Some(self.id)
    }

    /// True if a press started on this widget and has not resolved.
    pub fn is_about_to_active(&self) -> bool {
        self.interaction.about_to_active == Some(self.id)
    }

    /// True if this widget is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.interaction.dragging == Some(self.id)
    }
}
