//! Screen-space points.

/// A pixel coordinate on the render surface.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Sentinel returned when nothing is on screen.
    pub const OFFSCREEN: Point = Point { x: -1, y: -1 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check for the [`Point::OFFSCREEN`] sentinel.
    #[must_use]
    pub const fn is_offscreen(self) -> bool {
        self.x == Self::OFFSCREEN.x && self.y == Self::OFFSCREEN.y
    }
}
