//! A render backend that records what was drawn.

use geom::Rect;

use crate::core::error::Result;
use crate::core::render::RenderBackend;
use crate::core::style::Color;

/// One recorded drawing operation, in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A rectangle fill.
    Fill {
        /// The filled area.
        rect: Rect,
        /// The fill color.
        color: Color,
    },
    /// A text draw.
    Text {
        /// The area the text was laid out in.
        rect: Rect,
        /// The text itself.
        text: String,
        /// The text color.
        color: Color,
    },
}

/// A backend that records draw calls instead of painting, so tests can
/// assert on exactly what a frame produced.
#[derive(Debug, Default)]
pub struct TestRender {
    /// The operations of the most recent frame, in draw order.
    pub ops: Vec<DrawOp>,
}

impl TestRender {
    /// A fresh recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The rects of all fills, in draw order.
    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, .. } => Some(*rect),
                DrawOp::Text { .. } => None,
            })
            .collect()
    }

    /// True if some text op rendered exactly this string.
    pub fn contains_text(&self, wanted: &str) -> bool {
        self.ops.iter().any(|op| match op {
            DrawOp::Text { text, .. } => text == wanted,
            DrawOp::Fill { .. } => false,
        })
    }
}

impl RenderBackend for TestRender {
    fn fill(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.ops.push(DrawOp::Fill { rect, color });
        Ok(())
    }

    fn text(&mut self, rect: Rect, text: &str, color: Color) -> Result<()> {
        self.ops.push(DrawOp::Text {
            rect,
            text: text.to_string(),
            color,
        });
        Ok(())
    }
}
