//! A filled rectangle.

use geom::Rect;

use crate::core::context::{DrawCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::layout::{leaf_rect, Constraint, Sizing};
use crate::core::render::Render;
use crate::core::style::Color;
use crate::widget::{Widget, WidgetKind};

/// A solid block of color, optionally highlighted while the pointer is
/// over it. Useful as a spacer, a background, or a drag handle.
#[derive(Debug)]
pub struct Rectangle {
    width: Sizing,
    height: Sizing,
    color: Color,
    hot_color: Option<Color>,
}

impl Rectangle {
    /// A white rectangle with undefined sizing.
    pub fn new() -> Self {
        Self {
            width: Sizing::Undefined,
            height: Sizing::Undefined,
            color: Color::WHITE,
            hot_color: None,
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

    /// Set the fill color.
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    /// Set the fill used while the pointer is over the rectangle.
    pub fn with_hot_color(mut self, c: Color) -> Self {
        self.hot_color = Some(c);
        self
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Rectangle {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Rectangle
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        Ok(leaf_rect(self.width, self.height, c))
    }

    fn draw(&self, ctx: &DrawCtx, rndr: &mut Render) -> Result<()> {
        let color = match self.hot_color {
            Some(hot) if ctx.is_hot() => hot,
            _ => self.color,
        };
        rndr.fill(ctx.size().rect(), color)
    }
}
