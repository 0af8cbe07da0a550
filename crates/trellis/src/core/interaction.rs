//! Interaction state derived from the pointer and keyboard.

use std::time::Instant;

use geom::Point;

use crate::core::event::key::Key;
use crate::core::id::NodeId;
use crate::core::world::Core;

/// The per-frame interaction state the event loop maintains and the
/// draw pass consumes. All node references are generation-checked
/// handles; [`InteractionContext::prune`] drops any that have gone
/// stale since the last frame.
#[derive(Debug, Default)]
pub struct InteractionContext {
    /// The node under the pointer, refreshed on every pointer event.
    pub hot: Option<NodeId>,
    /// The node that last received a completed click. Cleared when a
    /// click lands on empty space.
    pub active: Option<NodeId>,
    /// The node a press started on, pending release.
    pub about_to_active: Option<NodeId>,
    /// The node currently being dragged.
    pub dragging: Option<NodeId>,
    /// The dragged node's override origin, in its parent's space.
    pub drag_origin: Option<Point>,
    /// True if the last completed click was the second of a
    /// double-click.
    pub double_clicked: bool,
    /// Keys received since the last frame was rendered.
    pub keys: Vec<Key>,
}

impl InteractionContext {
    /// A fresh, empty interaction state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop references to nodes that no longer exist in the tree.
    pub fn prune(&mut self, core: &Core) {
        for slot in [
            &mut self.hot,
            &mut self.active,
            &mut self.about_to_active,
        ] {
            if slot.is_some_and(|id| !core.contains(id)) {
                *slot = None;
            }
        }
        if self.dragging.is_some_and(|id| !core.contains(id)) {
            self.dragging = None;
            self.drag_origin = None;
        }
    }
}

/// Raw pointer bookkeeping that backs the interaction state. Tracks
/// the physical button and the motion since the press, which is not
/// meaningful to widgets and so stays out of [`InteractionContext`].
#[derive(Debug, Default)]
pub(crate) struct Pointer {
    /// The primary button is currently held.
    pub(crate) down: bool,
    /// When the last completed click was released.
    pub(crate) last_click: Option<Instant>,
    /// Pointer position at the first motion after the press, the
    /// anchor drag deltas are measured from. `None` until that motion
    /// arrives.
    pub(crate) drag_start: Option<Point>,
    /// Origin of the pressed node's rect when the drag was anchored.
    pub(crate) grab_origin: Option<Point>,
}
