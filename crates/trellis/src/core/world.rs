//! The widget tree.

use std::any::Any;
use std::collections::{HashMap, VecDeque};

use geom::{Expanse, Point, Rect};
use slotmap::SlotMap;

use crate::core::context::{Ctx, DrawCtx, HitCtx, LayoutCtx};
use crate::core::error::{Error, Result};
use crate::core::event::key::Key;
use crate::core::event::Signal;
use crate::core::id::NodeId;
use crate::core::interaction::InteractionContext;
use crate::core::layout::Constraint;
use crate::core::node::Node;
use crate::core::render::Render;
use crate::widget::{EventOutcome, Widget, WidgetKind};

const NO_CHILDREN: &[NodeId] = &[];

/// The tree itself: an arena of [`Node`]s plus the bookkeeping that
/// hangs off it. All structural operations go through here, and all of
/// them take generation-checked [`NodeId`] handles, so operating on a
/// node that was removed earlier returns [`Error::UnknownNode`] rather
/// than touching a recycled slot.
pub struct Core {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    ids: HashMap<String, NodeId>,
    signals: VecDeque<(NodeId, Signal)>,
}

impl Core {
    /// Build a tree with the given root widget. The root is mounted
    /// immediately, so a composite root builds its children here.
    pub fn new(root: impl Widget) -> Result<Self> {
        let mut core = Self {
            nodes: SlotMap::with_key(),
            root: NodeId::default(),
            ids: HashMap::new(),
            signals: VecDeque::new(),
        };
        core.root = core.nodes.insert(Node::new(Box::new(root)));
        core.mount(core.root)?;
        Ok(core)
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// True if the handle refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// A node's children in z-order. Empty for dead handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(NO_CHILDREN, |n| &n.children)
    }

    /// A node's parent.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// A node's committed rect, in its parent's space.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).and_then(|n| n.rect)
    }

    /// A node's widget kind.
    pub fn kind(&self, id: NodeId) -> Option<WidgetKind> {
        self.nodes.get(id).map(|n| n.kind)
    }

    /// Add a widget as the last child of `parent` and mount it.
    pub fn add_child(&mut self, parent: NodeId, w: impl Widget) -> Result<NodeId> {
        self.add_boxed(parent, Box::new(w))
    }

    /// Boxed form of [`Core::add_child`], for callers assembling
    /// widgets dynamically.
    pub fn add_boxed(&mut self, parent: NodeId, w: Box<dyn Widget>) -> Result<NodeId> {
        let id = self.create_detached_boxed(w);
        self.attach(parent, id)?;
        Ok(id)
    }

    /// Create a node that is not yet part of the tree. It is not
    /// mounted until attached.
    pub fn create_detached(&mut self, w: impl Widget) -> NodeId {
        self.create_detached_boxed(Box::new(w))
    }

    fn create_detached_boxed(&mut self, w: Box<dyn Widget>) -> NodeId {
        self.nodes.insert(Node::new(w))
    }

    /// Attach a detached node as the last child of `parent`, mounting
    /// it if it has not been mounted before.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.nodes.contains_key(child) {
            return Err(Error::UnknownNode);
        }
        let pnode = self.nodes.get_mut(parent).ok_or(Error::UnknownNode)?;
        pnode.children.push(child);
        if let Some(cnode) = self.nodes.get_mut(child) {
            cnode.parent = Some(parent);
        }
        self.mount(child)
    }

    /// Remove a node and its entire subtree. Handles into the removed
    /// subtree go stale; the interaction layer prunes its own copies
    /// at the next event.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(Error::Invalid("cannot remove the root node".into()));
        }
        let node = self.nodes.get(id).ok_or(Error::UnknownNode)?;
        if let Some(parent) = node.parent {
            if let Some(pnode) = self.nodes.get_mut(parent) {
                pnode.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes.remove(cur) {
                if let Some(user_id) = node.user_id {
                    self.ids.remove(&user_id);
                }
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    /// Remove all children of a node.
    pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
        for child in self.children(id).to_vec() {
            self.remove_subtree(child)?;
        }
        Ok(())
    }

    /// Register a user-visible id for a node. Ids are unique across
    /// the tree; registering a name already held by another live node
    /// fails, and the slot is freed again when the node is removed.
    pub fn set_id(&mut self, id: NodeId, user_id: impl Into<String>) -> Result<()> {
        let user_id = user_id.into();
        if let Some(&existing) = self.ids.get(&user_id) {
            if existing != id {
                return Err(Error::DuplicateId(user_id));
            }
        }
        let node = self.nodes.get_mut(id).ok_or(Error::UnknownNode)?;
        if let Some(old) = node.user_id.replace(user_id.clone()) {
            self.ids.remove(&old);
        }
        self.ids.insert(user_id, id);
        Ok(())
    }

    /// Resolve a user-visible id to its node.
    pub fn node_for_id(&self, user_id: &str) -> Option<NodeId> {
        self.ids.get(user_id).copied()
    }

    /// Run a closure against a node's widget. The widget is moved out
    /// of its slot for the duration, so it can freely operate on the
    /// tree through the provided [`Ctx`].
    pub fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Ctx) -> R,
    ) -> Result<R> {
        let mut w = self.take_widget(id)?;
        let mut ctx = Ctx::new(self, id);
        let r = f(w.as_mut(), &mut ctx);
        self.restore_widget(id, w);
        Ok(r)
    }

    /// Like [`Core::with_widget_mut`], but downcast to the widget's
    /// concrete type. Fails if the node holds a different type.
    pub fn with_widget<T: Widget, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T, &mut Ctx) -> R,
    ) -> Result<R> {
        let mut w = self.take_widget(id)?;
        let mut ctx = Ctx::new(self, id);
        let r = (w.as_mut() as &mut dyn Any)
            .downcast_mut::<T>()
            .map(|t| f(t, &mut ctx));
        self.restore_widget(id, w);
        r.ok_or_else(|| {
            Error::Invalid(format!(
                "node does not hold a {}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Queue a signal from `source`. Delivery happens when the event
    /// loop next routes signals.
    pub fn emit(&mut self, source: NodeId, signal: Signal) {
        self.signals.push_back((source, signal));
    }

    /// Take the next queued signal, if any.
    pub fn pop_signal(&mut self) -> Option<(NodeId, Signal)> {
        self.signals.pop_front()
    }

    /// Lay out the whole tree into a root surface of the given size,
    /// committing every node's rect.
    pub fn layout(&mut self, interaction: &InteractionContext, size: Expanse) -> Result<()> {
        let c = Constraint::at_origin(size.w, size.h);
        self.layout_node(self.root, &c, interaction)?;
        Ok(())
    }

    pub(crate) fn layout_node(
        &mut self,
        id: NodeId,
        c: &Constraint,
        interaction: &InteractionContext,
    ) -> Result<Rect> {
        let mut w = self.take_widget(id)?;
        let mut ctx = LayoutCtx::new(self, interaction, id);
        let res = w.layout(&mut ctx, c);
        self.restore_widget(id, w);
        let mut rect = res?;
        if interaction.dragging == Some(id) {
            if let Some(origin) = interaction.drag_origin {
                rect = rect.at(origin);
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.rect = Some(rect);
        }
        Ok(rect)
    }

    /// Find the deepest node under a point in root coordinates, using
    /// the rects committed by the last layout pass. Returns `None` if
    /// the point hits nothing, including exact widget edges.
    pub fn locate(&self, p: Point) -> Option<NodeId> {
        self.hit_node(self.root, p)
    }

    pub(crate) fn hit_node(&self, id: NodeId, p: Point) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        node.rect?;
        let w = node.widget.as_ref()?;
        w.hit_test(&HitCtx::new(self, id), p)
    }

    /// Paint the tree through a render handle, parents before
    /// children. Nodes that have never been laid out are skipped with
    /// a warning.
    pub fn draw(&self, interaction: &InteractionContext, rndr: &mut Render) -> Result<()> {
        self.draw_node(self.root, interaction, rndr)
    }

    fn draw_node(
        &self,
        id: NodeId,
        interaction: &InteractionContext,
        rndr: &mut Render,
    ) -> Result<()> {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        let Some(rect) = node.rect else {
            tracing::warn!(node = %node.name, "draw requested before layout, skipping");
            return Ok(());
        };
        let Some(w) = node.widget.as_ref() else {
            return Err(Error::Internal("widget slot empty during draw".into()));
        };
        rndr.push(rect.origin());
        let res = w.draw(&DrawCtx::new(self, interaction, id), rndr).and_then(|()| {
            for child in &node.children {
                self.draw_node(*child, interaction, rndr)?;
            }
            Ok(())
        });
        rndr.pop(rect.origin());
        res
    }

    /// Deliver a completed click to `target`, bubbling towards the
    /// root until some widget handles or consumes it.
    pub fn dispatch_click(&mut self, target: NodeId) -> Result<EventOutcome> {
        let mut cur = Some(target);
        while let Some(id) = cur {
            if !self.contains(id) {
                break;
            }
            let outcome = self.with_widget_mut(id, |w, ctx| w.on_click(ctx))??;
            match outcome {
                EventOutcome::Handle | EventOutcome::Consume => return Ok(outcome),
                EventOutcome::Ignore => cur = self.parent(id),
            }
        }
        Ok(EventOutcome::Ignore)
    }

    /// Deliver a key to `target` only. Keys do not bubble.
    pub fn dispatch_char(&mut self, target: NodeId, k: Key) -> Result<EventOutcome> {
        self.with_widget_mut(target, |w, ctx| w.on_char(ctx, k))?
    }

    /// Bubble a queued signal from the emitter's parent towards the
    /// root. Returns true if an ancestor claimed it.
    pub fn dispatch_signal(&mut self, source: NodeId, signal: &Signal) -> Result<bool> {
        let mut cur = self.parent(source);
        while let Some(id) = cur {
            if !self.contains(id) {
                break;
            }
            let outcome = self.with_widget_mut(id, |w, ctx| w.on_signal(ctx, source, signal))??;
            match outcome {
                EventOutcome::Handle | EventOutcome::Consume => return Ok(true),
                EventOutcome::Ignore => cur = self.parent(id),
            }
        }
        Ok(false)
    }

    /// Replace the layer at index `z` of a layers node. `z` equal to
    /// the current stack height pushes a new topmost layer; anything
    /// beyond that would leave holes and is rejected.
    pub fn set_layer(&mut self, layers: NodeId, z: usize, w: impl Widget) -> Result<NodeId> {
        self.check_layers(layers)?;
        let stack = self.children(layers).to_vec();
        if z > stack.len() {
            return Err(Error::Invalid(format!(
                "layer index {z} out of range, stack height is {}",
                stack.len()
            )));
        }
        if z == stack.len() {
            return self.add_child(layers, w);
        }
        let old = stack[z];
        let id = self.create_detached(w);
        if let Some(pnode) = self.nodes.get_mut(layers) {
            pnode.children[z] = id;
        }
        if let Some(cnode) = self.nodes.get_mut(id) {
            cnode.parent = Some(layers);
        }
        // The old layer is already out of the child list, so this only
        // reaps the subtree.
        self.remove_subtree(old)?;
        self.mount(id)?;
        Ok(id)
    }

    /// Push a new topmost layer onto a layers node.
    pub fn push_layer(&mut self, layers: NodeId, w: impl Widget) -> Result<NodeId> {
        self.check_layers(layers)?;
        self.add_child(layers, w)
    }

    /// Remove every layer above the base. Returns true if any layer
    /// was removed.
    pub fn pop_layers(&mut self, layers: NodeId) -> Result<bool> {
        self.check_layers(layers)?;
        let stack = self.children(layers).to_vec();
        if stack.len() <= 1 {
            return Ok(false);
        }
        for layer in &stack[1..] {
            self.remove_subtree(*layer)?;
        }
        Ok(true)
    }

    /// The index of the topmost layer of a layers node. An empty stack
    /// reports level zero.
    pub fn level(&self, layers: NodeId) -> Result<usize> {
        self.check_layers(layers)?;
        Ok(self.children(layers).len().saturating_sub(1))
    }

    /// A human-readable dump of the tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        use std::fmt::Write;
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = write!(out, "{} [{:?}]", node.name, node.kind);
        if let Some(user_id) = &node.user_id {
            let _ = write!(out, " #{user_id}");
        }
        if let Some(rect) = node.rect {
            let _ = write!(out, " {}x{}@{},{}", rect.w, rect.h, rect.x, rect.y);
        }
        out.push('\n');
        for child in &node.children {
            self.dump_node(*child, depth + 1, out);
        }
    }

    fn check_layers(&self, id: NodeId) -> Result<()> {
        match self.kind(id) {
            Some(WidgetKind::Layers) => Ok(()),
            Some(k) => Err(Error::Invalid(format!(
                "layer operation on a {k:?} node"
            ))),
            None => Err(Error::UnknownNode),
        }
    }

    fn mount(&mut self, id: NodeId) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(Error::UnknownNode)?;
        if node.mounted {
            return Ok(());
        }
        node.mounted = true;
        tracing::debug!(node = %node.name, "mounting");
        self.with_widget_mut(id, |w, ctx| w.on_mount(ctx))?
    }

    fn take_widget(&mut self, id: NodeId) -> Result<Box<dyn Widget>> {
        self.nodes
            .get_mut(id)
            .ok_or(Error::UnknownNode)?
            .widget
            .take()
            .ok_or_else(|| Error::Internal("widget slot already taken".into()))
    }

    fn restore_widget(&mut self, id: NodeId, w: Box<dyn Widget>) {
        // The node may have been removed by its own widget; the widget
        // is simply dropped in that case.
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(w);
        }
    }
}

impl std::fmt::Debug for Core {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Core")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Column, Rectangle};

    #[test]
    fn stale_handles_are_rejected() {
        let mut core = Core::new(Column::new()).unwrap();
        let child = core.add_child(core.root(), Rectangle::new()).unwrap();
        core.remove_subtree(child).unwrap();
        assert!(!core.contains(child));
        assert_eq!(core.rect(child), None);
        assert_eq!(
            core.add_child(child, Rectangle::new()),
            Err(Error::UnknownNode)
        );
    }

    #[test]
    fn duplicate_ids_are_rejected_and_freed_on_removal() {
        let mut core = Core::new(Column::new()).unwrap();
        let a = core.add_child(core.root(), Rectangle::new()).unwrap();
        let b = core.add_child(core.root(), Rectangle::new()).unwrap();
        core.set_id(a, "status").unwrap();
        assert_eq!(
            core.set_id(b, "status"),
            Err(Error::DuplicateId("status".into()))
        );
        // Re-registering the same node is a no-op.
        core.set_id(a, "status").unwrap();
        core.remove_subtree(a).unwrap();
        assert_eq!(core.node_for_id("status"), None);
        core.set_id(b, "status").unwrap();
        assert_eq!(core.node_for_id("status"), Some(b));
    }

    #[test]
    fn dump_shows_structure() {
        let mut core = Core::new(Column::new()).unwrap();
        let child = core.add_child(core.root(), Rectangle::new()).unwrap();
        core.set_id(child, "fill").unwrap();
        let dump = core.dump();
        assert!(dump.contains("column"));
        assert!(dump.contains("rectangle"));
        assert!(dump.contains("#fill"));
    }
}
