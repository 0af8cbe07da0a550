//! Mouse events.

use geom::Point;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// The primary button went down.
    Down,
    /// The primary button was released.
    Up,
    /// The pointer moved.
    Move,
}

/// A pointer event. The location is in root coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// What happened.
    pub action: MouseAction,
    /// Where it happened, relative to the root origin.
    pub location: Point,
}

impl MouseEvent {
    /// Construct an event from an action and a coordinate pair.
    pub fn new(action: MouseAction, x: i32, y: i32) -> Self {
        Self {
            action,
            location: Point::new(x, y),
        }
    }
}
