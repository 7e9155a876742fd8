//! Rectangular tile areas.

use crate::Tile;

/// An axis-aligned box spanned by two corner tiles (inclusive).
///
/// Corners are normalized on construction so `start` is the minimum on both
/// axes. An entity without spatial extent has both corners equal.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Area {
    start: Tile,
    end: Tile,
}

impl Area {
    /// Area spanned by two corners on the plane of `a`. `NIL` if either corner is.
    #[must_use]
    pub fn new(a: Tile, b: Tile) -> Self {
        if a.is_nil() || b.is_nil() {
            return Self::point(Tile::NIL);
        }
        Self {
            start: Tile::new(a.x.min(b.x), a.y.min(b.y), a.plane),
            end: Tile::new(a.x.max(b.x), a.y.max(b.y), a.plane),
        }
    }

    /// A degenerate area covering a single tile.
    #[must_use]
    pub const fn point(tile: Tile) -> Self {
        Self {
            start: tile,
            end: tile,
        }
    }

    /// Minimum corner.
    #[must_use]
    pub const fn start(self) -> Tile {
        self.start
    }

    /// Maximum corner.
    #[must_use]
    pub const fn end(self) -> Tile {
        self.end
    }

    #[must_use]
    pub const fn plane(self) -> i32 {
        self.start.plane
    }

    /// True for the area of an object with no location.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.start.is_nil()
    }

    #[must_use]
    pub fn is_point(self) -> bool {
        self.start == self.end
    }

    /// Width and height in tiles. `(0, 0)` for a `NIL` area.
    #[must_use]
    pub const fn size(self) -> (u32, u32) {
        if self.is_nil() {
            return (0, 0);
        }
        (
            self.end.x.abs_diff(self.start.x).saturating_add(1),
            self.end.y.abs_diff(self.start.y).saturating_add(1),
        )
    }

    /// Check if `tile` lies inside the area on the same plane.
    #[must_use]
    pub fn contains(self, tile: Tile) -> bool {
        !self.is_nil()
            && !tile.is_nil()
            && tile.plane == self.plane()
            && (self.start.x..=self.end.x).contains(&tile.x)
            && (self.start.y..=self.end.y).contains(&tile.y)
    }

    /// The central tile, rounding toward the start corner.
    #[must_use]
    pub const fn center(self) -> Tile {
        if self.is_nil() {
            return Tile::NIL;
        }
        Tile::new(
            midpoint(self.start.x, self.end.x),
            midpoint(self.start.y, self.end.y),
            self.start.plane,
        )
    }

    /// Iterate every tile in the area, row by row.
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        let (width, height) = self.size();
        let Self { start, .. } = self;
        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| start.derive(dx as i32, dy as i32))
        })
    }
}

/// Midpoint of `start <= end`, rounding toward `start`.
const fn midpoint(start: i32, end: i32) -> i32 {
    (start as i64 + (end as i64 - start as i64) / 2) as i32
}
