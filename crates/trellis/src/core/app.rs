//! The event loop: host events in, interaction state and paint out.

use std::time::Duration;

use geom::Expanse;

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::Result;
use crate::core::event::key::Key;
use crate::core::event::mouse::{MouseAction, MouseEvent};
use crate::core::event::{Event, Signal};
use crate::core::id::NodeId;
use crate::core::interaction::{InteractionContext, Pointer};
use crate::core::render::{Render, RenderBackend};
use crate::core::world::Core;
use crate::widget::Widget;

/// The default window within which two clicks count as a double-click.
pub const DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// Drives a [`Core`] from host input. The host owns the window and the
/// renderer; it feeds translated events into [`App::event`], calls
/// [`App::render`] once per frame, and drains [`App::take_signals`]
/// for notifications no widget claimed.
pub struct App {
    /// The widget tree.
    pub core: Core,
    /// Interaction state, readable by the host between events.
    pub interaction: InteractionContext,
    pointer: Pointer,
    clock: Box<dyn Clock>,
    double_click: Duration,
    root_size: Option<Expanse>,
    outbox: Vec<(NodeId, Signal)>,
}

impl App {
    /// Build an app over a fresh tree with the given root widget,
    /// using the system clock.
    pub fn new(root: impl Widget) -> Result<Self> {
        Self::with_clock(root, Box::new(SystemClock))
    }

    /// Build an app with an explicit clock. Tests pass a manual clock
    /// to control click timing.
    pub fn with_clock(root: impl Widget, clock: Box<dyn Clock>) -> Result<Self> {
        Ok(Self {
            core: Core::new(root)?,
            interaction: InteractionContext::new(),
            pointer: Pointer::default(),
            clock,
            double_click: DOUBLE_CLICK,
            root_size: None,
            outbox: Vec::new(),
        })
    }

    /// Change the double-click detection window.
    pub fn set_double_click(&mut self, d: Duration) {
        self.double_click = d;
    }

    /// Set the root surface size. Also delivered via
    /// [`Event::Resize`].
    pub fn set_root_size(&mut self, size: Expanse) {
        self.root_size = Some(size);
    }

    /// Feed one host event through the tree.
    pub fn event(&mut self, e: Event) -> Result<()> {
        match e {
            Event::Mouse(m) => self.mouse(m),
            Event::Key(k) => self.key(k),
            Event::Resize(size) => {
                self.set_root_size(size);
                Ok(())
            }
        }
    }

    /// Lay out and paint the tree. Hit testing between frames uses the
    /// rects committed here. Does nothing until a root size is known.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> Result<()> {
        let Some(size) = self.root_size else {
            tracing::warn!("render before the root size is known, skipping");
            return Ok(());
        };
        self.core.layout(&self.interaction, size)?;
        let mut rndr = Render::new(backend);
        self.core.draw(&self.interaction, &mut rndr)?;
        self.interaction.keys.clear();
        Ok(())
    }

    /// Drain the signals that bubbled to the root unclaimed, oldest
    /// first, each paired with its emitting node.
    pub fn take_signals(&mut self) -> Vec<(NodeId, Signal)> {
        std::mem::take(&mut self.outbox)
    }

    fn mouse(&mut self, m: MouseEvent) -> Result<()> {
        self.interaction.prune(&self.core);
        let hit = self.core.locate(m.location);
        self.interaction.hot = hit;
        match m.action {
            MouseAction::Down => {
                if !self.pointer.down {
                    self.pointer.down = true;
                    self.interaction.about_to_active = hit;
                }
            }
            MouseAction::Up => {
                if self.pointer.down {
                    self.pointer.down = false;
                    let was_drag = self.interaction.dragging.is_some();
                    let now = self.clock.now();
                    self.interaction.double_clicked = self
                        .pointer
                        .last_click
                        .is_some_and(|t| now.duration_since(t) <= self.double_click);
                    self.pointer.last_click = Some(now);
                    self.pointer.drag_start = None;
                    self.pointer.grab_origin = None;
                    self.interaction.dragging = None;
                    self.interaction.drag_origin = None;
                    if !was_drag {
                        // A completed, undragged click: the target, or
                        // empty space, takes over as active.
                        self.interaction.active = hit;
                        if let Some(target) = hit {
                            self.core.dispatch_click(target)?;
                        }
                    }
                }
                self.interaction.about_to_active = None;
            }
            MouseAction::Move => {
                if self.pointer.down {
                    // The first motion after a press only anchors the
                    // drag; a click survives a single pixel of jitter.
                    // Motion past the anchor is a drag.
                    match self.pointer.drag_start {
                        None => {
                            self.pointer.drag_start = Some(m.location);
                            self.pointer.grab_origin = self
                                .interaction
                                .about_to_active
                                .and_then(|t| self.core.rect(t))
                                .map(|r| r.origin());
                        }
                        Some(start) => {
                            if let Some(target) = self.interaction.about_to_active {
                                let base = self.pointer.grab_origin.unwrap_or_default();
                                self.interaction.dragging = Some(target);
                                self.interaction.drag_origin =
                                    Some(base + (m.location - start));
                            }
                        }
                    }
                }
            }
        }
        self.route_signals()
    }

    fn key(&mut self, k: Key) -> Result<()> {
        self.interaction.prune(&self.core);
        self.interaction.keys.push(k);
        if let Some(active) = self.interaction.active {
            if self.core.contains(active) {
                self.core.dispatch_char(active, k)?;
            }
        }
        self.route_signals()
    }

    fn route_signals(&mut self) -> Result<()> {
        while let Some((source, signal)) = self.core.pop_signal() {
            if !self.core.dispatch_signal(source, &signal)? {
                tracing::debug!(?signal, "signal reached the root unclaimed");
                self.outbox.push((source, signal));
            }
        }
        Ok(())
    }
}
