//! Utilities for testing widget trees without a host.

mod harness;
mod render;

pub use harness::Harness;
pub use render::{DrawOp, TestRender};
