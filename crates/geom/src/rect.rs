use super::Point;

/// A rectangle in signed pixel space. The origin is the top-left corner,
/// expressed in the coordinate space of the owning widget's parent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from origin and size.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// One past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Return the rectangle shifted by an offset.
    pub fn translate(&self, d: Point) -> Self {
        Self {
            x: self.x + d.x,
            y: self.y + d.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Return the rectangle with a replaced origin.
    pub fn at(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Strict interior test: true iff the point lies strictly between the
    /// edges on both axes. Points on any edge do not hit.
    pub fn contains_open(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_open_is_strict() {
        let r = Rect::new(10, 10, 100, 50);
        assert!(r.contains_open(Point::new(11, 11)));
        assert!(r.contains_open(Point::new(109, 59)));
        // All four edges are excluded.
        assert!(!r.contains_open(Point::new(10, 30)));
        assert!(!r.contains_open(Point::new(110, 30)));
        assert!(!r.contains_open(Point::new(50, 10)));
        assert!(!r.contains_open(Point::new(50, 60)));
    }

    #[test]
    fn translate_and_at() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.translate(Point::new(-1, -2)), Rect::new(0, 0, 3, 4));
        assert_eq!(r.at(Point::new(7, 8)), Rect::new(7, 8, 3, 4));
        assert_eq!(r.right(), 4);
        assert_eq!(r.bottom(), 6);
    }
}
