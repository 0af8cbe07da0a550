//! Sizing policies and layout primitives.
//!
//! Layout is a single recursive pass. A parent hands each child a
//! [`Constraint`] carrying the space available to it and the position
//! it will occupy; the child resolves its own [`Sizing`] against that
//! space, lays out its own children, and returns the rectangle it
//! settled on. Rectangles are committed to the tree as the recursion
//! unwinds, so hit testing between frames always sees a consistent
//! snapshot.

use geom::Rect;

use crate::core::context::LayoutCtx;
use crate::core::error::Result;

/// How a widget wants to size one of its axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// No preference. Leaves resolve to zero (with a warning, since it
    /// almost always means a widget was left unconfigured); containers
    /// resolve to all available space.
    Undefined,
    /// An absolute pixel size, clamped to the available space.
    Fixed(i32),
    /// A percentage of the available space, `0.0..=100.0`.
    Percent(f32),
    /// A fraction of the available space, `0.0..=1.0`.
    Ratio(f32),
}

impl Sizing {
    /// True for [`Sizing::Fixed`]. Containers with a fixed axis keep
    /// their resolved size instead of shrinking to content.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Sizing::Fixed(_))
    }

    /// Resolve against the given available space, with leaf defaults.
    pub fn resolve_leaf(&self, available: i32) -> i32 {
        match self {
            Sizing::Undefined => {
                tracing::warn!("leaf widget with undefined sizing resolves to 0");
                0
            }
            _ => self.resolve_container(available),
        }
    }

    /// Resolve against the given available space, with container
    /// defaults: an undefined axis takes everything it is offered.
    pub fn resolve_container(&self, available: i32) -> i32 {
        match *self {
            Sizing::Undefined => available,
            Sizing::Fixed(v) => v.min(available),
            Sizing::Percent(p) => ((available as f32 * p / 100.0) as i32).min(available),
            Sizing::Ratio(r) => ((available as f32 * r) as i32).min(available),
        }
    }
}

/// The space and position a parent offers a child during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// Maximum width the child may occupy.
    pub max_width: i32,
    /// Maximum height the child may occupy.
    pub max_height: i32,
    /// The x position the child will be placed at, in parent space.
    pub x: i32,
    /// The y position the child will be placed at, in parent space.
    pub y: i32,
}

impl Constraint {
    /// A constraint pinned to the parent origin.
    pub fn at_origin(max_width: i32, max_height: i32) -> Self {
        Constraint {
            max_width,
            max_height,
            x: 0,
            y: 0,
        }
    }
}

/// Resolve a leaf widget's rect directly from its sizing policy. This
/// is the whole layout step for widgets without children.
pub fn leaf_rect(width: Sizing, height: Sizing, c: &Constraint) -> Rect {
    Rect::new(
        c.x,
        c.y,
        width.resolve_leaf(c.max_width),
        height.resolve_leaf(c.max_height),
    )
}

/// The stacking direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Children flow top to bottom.
    Vertical,
    /// Children flow left to right.
    Horizontal,
}

/// Lay out a container's children in a stack along `axis`.
///
/// Each child is placed at the running extent of the children before
/// it, and offered the container's resolved extent minus what the
/// stack has already consumed, so a `Ratio(1.0)` child takes exactly
/// the space that remains. Afterwards the container shrinks each
/// non-fixed axis to the extent its children actually reached, never
/// growing past its resolved bound.
pub(crate) fn stack_layout(
    ctx: &mut LayoutCtx,
    c: &Constraint,
    axis: Axis,
    width: Sizing,
    height: Sizing,
) -> Result<Rect> {
    let max_w = width.resolve_container(c.max_width);
    let max_h = height.resolve_container(c.max_height);
    let mut extent_x = 0;
    let mut extent_y = 0;
    for child in ctx.children() {
        let cc = match axis {
            Axis::Vertical => Constraint {
                max_width: max_w,
                max_height: (max_h - extent_y).max(0),
                x: 0,
                y: extent_y,
            },
            Axis::Horizontal => Constraint {
                max_width: (max_w - extent_x).max(0),
                max_height: max_h,
                x: extent_x,
                y: 0,
            },
        };
        let r = ctx.layout_child(child, cc)?;
        match axis {
            Axis::Vertical => {
                extent_x = extent_x.max(r.right());
                extent_y = r.bottom();
            }
            Axis::Horizontal => {
                extent_x = r.right();
                extent_y = extent_y.max(r.bottom());
            }
        }
    }
    let w = if width.is_fixed() {
        max_w
    } else {
        max_w.min(extent_x)
    };
    let h = if height.is_fixed() {
        max_h
    } else {
        max_h.min(extent_y)
    };
    Ok(Rect::new(c.x, c.y, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_clamps_to_available() {
        assert_eq!(Sizing::Fixed(50).resolve_leaf(100), 50);
        assert_eq!(Sizing::Fixed(150).resolve_leaf(100), 100);
    }

    #[test]
    fn undefined_differs_for_leaves_and_containers() {
        assert_eq!(Sizing::Undefined.resolve_leaf(100), 0);
        assert_eq!(Sizing::Undefined.resolve_container(100), 100);
    }

    #[test]
    fn fractions_floor() {
        assert_eq!(Sizing::Percent(50.0).resolve_leaf(101), 50);
        assert_eq!(Sizing::Ratio(0.5).resolve_leaf(101), 50);
        assert_eq!(Sizing::Percent(100.0).resolve_leaf(37), 37);
        assert_eq!(Sizing::Ratio(1.0).resolve_leaf(37), 37);
    }

    proptest! {
        #[test]
        fn resolution_never_exceeds_available(
            available in 0i32..10_000,
            fixed in 0i32..20_000,
            pct in 0.0f32..100.0,
            ratio in 0.0f32..1.0,
        ) {
            for s in [
                Sizing::Fixed(fixed),
                Sizing::Percent(pct),
                Sizing::Ratio(ratio),
                Sizing::Undefined,
            ] {
                prop_assert!(s.resolve_container(available) <= available);
                prop_assert!(s.resolve_leaf(available) <= available);
                prop_assert!(s.resolve_container(available) >= 0);
            }
        }
    }
}
