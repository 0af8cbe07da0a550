//! An editable text box.

use geom::Rect;

use crate::core::context::{Ctx, DrawCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::event::key::Key;
use crate::core::layout::{leaf_rect, Constraint, Sizing};
use crate::core::render::Render;
use crate::core::style::Color;
use crate::widget::{EventOutcome, Widget, WidgetKind};

/// A single editable text area. Receives keys while it is the active
/// widget; backspace removes exactly one character, so multi-byte
/// characters are never split.
#[derive(Debug)]
pub struct TextBox {
    width: Sizing,
    height: Sizing,
    text: String,
    color: Color,
    active_color: Color,
    text_color: Color,
}

impl TextBox {
    /// An empty text box with undefined sizing.
    pub fn new() -> Self {
        Self {
            width: Sizing::Undefined,
            height: Sizing::Undefined,
            text: String::new(),
            color: Color::WHITE,
            active_color: Color::rgb(0.95, 0.95, 1.0),
            text_color: Color::BLACK,
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

    /// Set the initial content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextBox {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextBox
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        Ok(leaf_rect(self.width, self.height, c))
    }

    fn draw(&self, ctx: &DrawCtx, rndr: &mut Render) -> Result<()> {
        let bg = if ctx.is_active() {
            self.active_color
        } else {
            self.color
        };
        let area = ctx.size().rect();
        rndr.fill(area, bg)?;
        rndr.text(area, &self.text, self.text_color)
    }

    fn on_char(&mut self, _ctx: &mut Ctx, k: Key) -> Result<EventOutcome> {
        match k {
            Key::Char(c) => self.text.push(c),
            Key::Backspace => {
                self.text.pop();
            }
        }
        Ok(EventOutcome::Handle)
    }
}
