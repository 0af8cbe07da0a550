//! A self-contained test rig around [`App`].

use std::sync::Arc;

use geom::Expanse;

use crate::core::app::App;
use crate::core::clock::ManualClock;
use crate::core::error::Result;
use crate::core::event::key::Key;
use crate::core::event::mouse::{MouseAction, MouseEvent};
use crate::core::event::{Event, Signal};
use crate::core::id::NodeId;
use crate::tutils::render::TestRender;
use crate::widget::Widget;

/// Wraps an [`App`] with a recording backend and a manual clock, and
/// renders after every event the way a host's frame loop would. Events
/// therefore always hit test against up-to-date layout.
pub struct Harness {
    /// The app under test.
    pub app: App,
    /// The recorded output of the most recent frame.
    pub render: TestRender,
    /// The clock driving click timing. Advance it between events.
    pub clock: Arc<ManualClock>,
}

impl Harness {
    /// A harness with a 100x100 root surface.
    pub fn new(root: impl Widget) -> Result<Self> {
        Self::with_size(root, Expanse::new(100, 100))
    }

    /// A harness with an explicit root surface size.
    pub fn with_size(root: impl Widget, size: Expanse) -> Result<Self> {
        let clock = Arc::new(ManualClock::new());
        let mut app = App::with_clock(root, Box::new(clock.clone()))?;
        app.set_root_size(size);
        let mut h = Self {
            app,
            render: TestRender::new(),
            clock,
        };
        h.redraw()?;
        Ok(h)
    }

    /// Render a frame into a fresh recording.
    pub fn redraw(&mut self) -> Result<()> {
        self.render.clear();
        self.app.render(&mut self.render)
    }

    /// Feed a mouse event, then render.
    pub fn mouse(&mut self, action: MouseAction, x: i32, y: i32) -> Result<()> {
        self.app
            .event(Event::Mouse(MouseEvent::new(action, x, y)))?;
        self.redraw()
    }

    /// A full press-release click at a location.
    pub fn click(&mut self, x: i32, y: i32) -> Result<()> {
        self.mouse(MouseAction::Down, x, y)?;
        self.mouse(MouseAction::Up, x, y)
    }

    /// Feed a key event, then render.
    pub fn key(&mut self, k: impl Into<Key>) -> Result<()> {
        self.app.event(Event::Key(k.into()))?;
        self.redraw()
    }

    /// Type a string into whatever widget is active.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.key(c)?;
        }
        Ok(())
    }

    /// Drain the unclaimed signals.
    pub fn signals(&mut self) -> Vec<(NodeId, Signal)> {
        self.app.take_signals()
    }
}
