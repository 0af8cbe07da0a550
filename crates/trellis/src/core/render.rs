//! The render seam between the tree and a host's drawing API.

use geom::{Point, Rect};

use crate::core::error::Result;
use crate::core::style::Color;

/// The drawing operations a host must supply. Coordinates arriving
/// here are absolute, already composed through the widget hierarchy.
pub trait RenderBackend {
    /// Fill a rectangle with a solid color.
    fn fill(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draw text laid out within a rectangle.
    fn text(&mut self, rect: Rect, text: &str, color: Color) -> Result<()>;
}

/// The render handle widgets draw through. Wraps a backend and carries
/// the translation from the current widget's space to absolute
/// coordinates; widgets always draw relative to their own origin.
pub struct Render<'a> {
    backend: &'a mut dyn RenderBackend,
    offset: Point,
}

impl<'a> Render<'a> {
    /// Wrap a backend with a zero offset.
    pub fn new(backend: &'a mut dyn RenderBackend) -> Self {
        Self {
            backend,
            offset: Point::zero(),
        }
    }

    /// Fill a rectangle given in the current widget's space.
    pub fn fill(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.backend.fill(rect.translate(self.offset), color)
    }

    /// Draw text within a rectangle given in the current widget's
    /// space.
    pub fn text(&mut self, rect: Rect, text: &str, color: Color) -> Result<()> {
        self.backend.text(rect.translate(self.offset), text, color)
    }

    pub(crate) fn push(&mut self, origin: Point) {
        self.offset = self.offset + origin;
    }

    pub(crate) fn pop(&mut self, origin: Point) {
        self.offset = self.offset - origin;
    }
}
