//! The widget trait and its supporting types.

use std::any::Any;

use geom::{Point, Rect};

use crate::core::context::{Ctx, DrawCtx, HitCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::event::key::Key;
use crate::core::event::Signal;
use crate::core::id::NodeId;
use crate::core::layout::Constraint;
use crate::core::render::Render;
use crate::core::state::NodeName;

/// A coarse classification of widgets. The core uses kinds to validate
/// operations that only make sense on particular widgets, such as the
/// layer-stack operations on [`crate::Core`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A plain filled rectangle.
    Rectangle,
    /// A vertical stack container.
    Column,
    /// A horizontal stack container.
    Row,
    /// A clickable button.
    Button,
    /// An editable text box.
    TextBox,
    /// A z-ordered stack of layers.
    Layers,
    /// A file selection dialog.
    FileSelector,
    /// Anything else.
    Custom,
}

/// What a widget did with an event it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was acted on. Propagation stops.
    Handle,
    /// The event was absorbed without action. Propagation stops.
    Consume,
    /// The event was not for this widget. It continues to bubble.
    Ignore,
}

/// The interface every widget implements.
///
/// Widgets are stored boxed in the tree and never hold references to
/// other widgets; all tree access goes through the context handed to
/// each method. Only `layout` is mandatory, everything else defaults
/// to inert behaviour.
pub trait Widget: Any + Send {
    /// The widget's kind. Defaults to [`WidgetKind::Custom`].
    fn kind(&self) -> WidgetKind {
        WidgetKind::Custom
    }

    /// The widget's name, used in logs and tree dumps.
    fn name(&self) -> NodeName {
        NodeName::convert(std::any::type_name::<Self>())
    }

    /// Resolve this widget's layout within the given constraint,
    /// laying out children through `ctx` along the way. Returns the
    /// rect this widget occupies, in its parent's coordinate space.
    fn layout(&mut self, ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect>;

    /// Paint this widget. The render target is pre-translated so the
    /// widget draws in its own coordinate space; children are painted
    /// by the core after this returns, back to front.
    fn draw(&self, _ctx: &DrawCtx, _rndr: &mut Render) -> Result<()> {
        Ok(())
    }

    /// Find the deepest node under `p`, which is in the parent's
    /// coordinate space, the same space as this widget's committed
    /// rect. The default suits leaves: a strict interior test against
    /// that rect, edges excluded.
    fn hit_test(&self, ctx: &HitCtx, p: Point) -> Option<NodeId> {
        let rect = ctx.rect()?;
        rect.contains_open(p).then(|| ctx.node_id())
    }

    /// A completed click landed on this widget.
    fn on_click(&mut self, _ctx: &mut Ctx) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A key arrived while this widget was active.
    fn on_char(&mut self, _ctx: &mut Ctx, _k: Key) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// A signal emitted by a descendant is bubbling past this widget.
    /// Return [`EventOutcome::Ignore`] to let it continue towards the
    /// root.
    fn on_signal(&mut self, _ctx: &mut Ctx, _source: NodeId, _signal: &Signal) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Called once, when the widget is attached to the tree. This is
    /// where composite widgets build their children.
    fn on_mount(&mut self, _ctx: &mut Ctx) -> Result<()> {
        Ok(())
    }
}
