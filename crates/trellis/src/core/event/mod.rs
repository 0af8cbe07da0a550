//! Input events and widget-emitted signals.

pub mod key;
pub mod mouse;

use std::path::PathBuf;

use geom::Expanse;

/// A host input event fed into [`crate::App::event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key event, delivered to the active widget.
    Key(key::Key),
    /// A pointer event in root coordinates.
    Mouse(mouse::MouseEvent),
    /// The root surface was resized.
    Resize(Expanse),
}

/// A typed notification emitted by a widget. Signals bubble from the
/// emitter's parent towards the root; a signal no ancestor claims is
/// handed to the host via [`crate::App::take_signals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A click was completed on the emitting widget.
    Clicked,
    /// A dialog was dismissed without a result. The payload names the
    /// dialog, and may be empty.
    Dismissed(String),
    /// A file was chosen in a file selector.
    FileChosen(PathBuf),
}
