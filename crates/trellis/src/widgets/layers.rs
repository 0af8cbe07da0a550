//! A z-ordered layer stack.

use geom::{Point, Rect};

use crate::core::context::{Ctx, HitCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::id::NodeId;
use crate::core::layout::Constraint;
use crate::widget::{EventOutcome, Widget, WidgetKind};

/// Stacks its children on top of each other, child index as z-order.
/// Every layer is offered the full extent and painted back to front,
/// but only the topmost layer is hit tested, so an open dialog blocks
/// interaction with everything beneath it.
///
/// The stack is manipulated through [`crate::Core::push_layer`],
/// [`crate::Core::set_layer`] and [`crate::Core::pop_layers`]. A click
/// that falls through the topmost layer onto the stack itself pops
/// back to the base layer, which is how click-outside dismissal works.
#[derive(Debug, Default)]
pub struct Layers;

impl Layers {
    /// An empty layer stack.
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Layers {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Layers
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        for child in ctx.children() {
            ctx.layout_child(child, Constraint::at_origin(c.max_width, c.max_height))?;
        }
        // The stack always occupies its full slot, however little the
        // layers use of it.
        Ok(Rect::new(c.x, c.y, c.max_width, c.max_height))
    }

    fn hit_test(&self, ctx: &HitCtx, p: Point) -> Option<NodeId> {
        let rect = ctx.rect()?;
        let local = p - rect.origin();
        if let Some(&top) = ctx.children().last() {
            if let Some(hit) = ctx.hit_child(top, local) {
                return Some(hit);
            }
        }
        rect.contains_open(p).then(|| ctx.node_id())
    }

    fn on_click(&mut self, ctx: &mut Ctx) -> Result<EventOutcome> {
        let id = ctx.node_id();
        if ctx.core().pop_layers(id)? {
            Ok(EventOutcome::Handle)
        } else {
            Ok(EventOutcome::Ignore)
        }
    }
}
