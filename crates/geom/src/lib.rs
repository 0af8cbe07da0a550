//! Geometry primitives used across trellis.
//!
//! All coordinates are signed pixels: widget rectangles are stored in
//! parent-local space, and a dragged widget may end up at a negative
//! origin.

/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
