//! A clickable button.

use geom::Rect;

use crate::core::context::{Ctx, DrawCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::event::Signal;
use crate::core::layout::{leaf_rect, Constraint, Sizing};
use crate::core::render::Render;
use crate::core::style::Color;
use crate::widget::{EventOutcome, Widget, WidgetKind};

/// A labelled button. Emits [`Signal::Clicked`] when a click completes
/// on it, and renders engaged while pressed, while it is the active
/// widget, or while its `selected` flag is set.
#[derive(Debug)]
pub struct Button {
    width: Sizing,
    height: Sizing,
    text: String,
    color: Color,
    engaged_color: Color,
    text_color: Color,
    selected: bool,
}

impl Button {
    /// A button with the given label and undefined sizing.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            width: Sizing::Undefined,
            height: Sizing::Undefined,
            text: text.into(),
            color: Color::rgb(0.85, 0.85, 0.85),
            engaged_color: Color::rgb(0.55, 0.65, 0.9),
            text_color: Color::BLACK,
            selected: false,
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

    /// Set the idle fill color.
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    /// Set the fill used while engaged.
    pub fn with_engaged_color(mut self, c: Color) -> Self {
        self.engaged_color = c;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the button renders engaged regardless of interaction.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Pin or unpin the engaged rendering.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl Widget for Button {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        Ok(leaf_rect(self.width, self.height, c))
    }

    fn draw(&self, ctx: &DrawCtx, rndr: &mut Render) -> Result<()> {
        let engaged = self.selected || ctx.is_about_to_active() || ctx.is_active();
        let bg = if engaged { self.engaged_color } else { self.color };
        let area = ctx.size().rect();
        rndr.fill(area, bg)?;
        rndr.text(area, &self.text, self.text_color)
    }

    fn on_click(&mut self, ctx: &mut Ctx) -> Result<EventOutcome> {
        ctx.emit(Signal::Clicked);
        Ok(EventOutcome::Handle)
    }
}
