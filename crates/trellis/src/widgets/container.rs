//! Stack containers.

use geom::{Point, Rect};

use crate::core::context::{HitCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::id::NodeId;
use crate::core::layout::{stack_layout, Axis, Constraint, Sizing};
use crate::widget::{Widget, WidgetKind};

/// A container that stacks its children top to bottom. Children are
/// offered the container's full resolved extent and placed at the
/// running height of those before them; afterwards any non-fixed axis
/// shrinks to the children's extent.
#[derive(Debug)]
pub struct Column {
    width: Sizing,
    height: Sizing,
}

impl Column {
    /// A column with undefined sizing, filling whatever it is offered
    /// and shrinking to content.
    pub fn new() -> Self {
        Self {
            width: Sizing::Undefined,
            height: Sizing::Undefined,
        }
    }

    /// Set the width policy.
    pub fn with_width(mut self, s: Sizing) -> Self {
        self.width = s;
        self
    }

    /// Set the height policy.
    pub fn with_height(mut self, s: Sizing) -> Self {
        self.height = s;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Column
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        stack_layout(ctx, c, Axis::Vertical, self.width, self.height)
    }

    fn hit_test(&self, ctx: &HitCtx, p: Point) -> Option<NodeId> {
        ctx.hit_children_first(p)
    }
}

/// A container that stacks its children left to right. The horizontal
/// counterpart of [`Column`].
#[derive(Debug)]
pub struct Row {
    width: Sizing,
    height: Sizing,
}

impl Row {
    /// A row with undefined sizing.
    pub fn new() -> Self {
        Self {
            width: Sizing::Undefined,
            height: Sizing::Undefined,
        }
    }

    /// Set the width policy.
    pub fn with_width(mut self, s: Sizing) -> Self {
        self.width = s;
        self
    }

    /// Set the height policy.
    pub fn with_height(mut self, s: Sizing) -> Self {
        self.height = s;
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Row
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        stack_layout(ctx, c, Axis::Horizontal, self.width, self.height)
    }

    fn hit_test(&self, ctx: &HitCtx, p: Point) -> Option<NodeId> {
        ctx.hit_children_first(p)
    }
}
