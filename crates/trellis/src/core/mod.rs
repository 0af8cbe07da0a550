//! Core machinery: the node arena, event plumbing, layout primitives
//! and the collaborator traits that keep the tree runnable headless.

pub mod app;
pub mod clock;
pub mod context;
pub mod error;
pub mod event;
pub mod fs;
pub mod id;
pub mod interaction;
pub mod layout;
pub mod node;
pub mod render;
pub mod state;
pub mod style;
pub mod world;
