//! Trellis is a retained-mode UI core: a widget tree with layout,
//! hit testing and interaction state, decoupled from any particular
//! window system or renderer.
//!
//! The crate is organised around a few pieces:
//!
//! - [`Core`] owns the widget tree. Nodes live in an arena and are
//!   addressed by generation-checked [`NodeId`] handles, so a stale
//!   handle to a removed node can never reach a recycled slot.
//! - [`Widget`] is the trait every widget implements. Widgets compute
//!   their own layout, test hits against themselves, and react to
//!   clicks, keys and bubbled [`Signal`]s.
//! - [`App`] drives the whole thing: it translates a host's pointer
//!   and key events into interaction state (hot, active, dragging),
//!   runs layout and painting, and collects signals no widget
//!   claimed.
//! - Rendering, the filesystem and time sit behind the
//!   [`RenderBackend`], [`Filesystem`] and [`Clock`] traits, so the
//!   core runs headless under test.
//!
//! Coordinates are signed pixels from the [`geom`] crate. All layout
//! and hit testing is done in a widget's own coordinate space, with
//! origins composed on the way down the tree.

mod core;

pub mod tutils;
pub mod widget;
pub mod widgets;

pub use geom;

pub use crate::core::{
    app::App,
    clock::{Clock, ManualClock, SystemClock},
    context::{Ctx, DrawCtx, HitCtx, LayoutCtx},
    error::{Error, Result},
    event::{key::Key, mouse::MouseAction, mouse::MouseEvent, Event, Signal},
    fs::{Filesystem, MemFs, StdFs},
    id::{NodeId, TypedId},
    interaction::InteractionContext,
    layout::{Constraint, Sizing},
    node::Node,
    render::{Render, RenderBackend},
    state::NodeName,
    style::Color,
    world::Core,
};
pub use crate::widget::{EventOutcome, Widget, WidgetKind};
