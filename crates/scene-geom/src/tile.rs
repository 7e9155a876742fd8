//! Absolute grid tiles and the map base they are derived from.

use std::fmt;

/// An absolute grid cell.
#[derive(Copy, Clone, Hash, Eq, PartialEq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl Tile {
    /// Sentinel for "location unknown".
    pub const NIL: Tile = Tile {
        x: -1,
        y: -1,
        plane: -1,
    };

    #[must_use]
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Check for the [`Tile::NIL`] sentinel. Only an exact match counts.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.x == Self::NIL.x && self.y == Self::NIL.y && self.plane == Self::NIL.plane
    }

    /// Offset this tile on the same plane.
    ///
    /// Deriving from `NIL` stays `NIL`.
    #[must_use]
    pub const fn derive(self, dx: i32, dy: i32) -> Self {
        self.derive_on(dx, dy, self.plane)
    }

    /// Offset this tile and move it onto `plane`.
    ///
    /// Coordinates wrap on overflow.
    #[must_use]
    pub const fn derive_on(self, dx: i32, dy: i32, plane: i32) -> Self {
        if self.is_nil() {
            return Self::NIL;
        }
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            plane,
        }
    }

    /// Euclidean distance in tiles, ignoring the plane.
    ///
    /// Returns `f64::INFINITY` when either side is `NIL`.
    #[must_use]
    pub fn distance_to(self, other: Tile) -> f64 {
        if self.is_nil() || other.is_nil() {
            return f64::INFINITY;
        }
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            return f.write_str("Tile(NIL)");
        }
        write!(f, "Tile({}, {}, {})", self.x, self.y, self.plane)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

/// Origin of the loaded region, owned by the host.
///
/// Relative offsets are measured from this tile. It moves whenever the host
/// loads a new region, so it must be read fresh for every conversion.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct MapBase(Tile);

impl MapBase {
    #[must_use]
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self(Tile::new(x, y, plane))
    }

    /// The base as a plain tile.
    #[must_use]
    pub const fn tile(self) -> Tile {
        self.0
    }

    /// Tile at `(dx, dy)` from the base, on the base plane.
    #[must_use]
    pub const fn derive(self, dx: i32, dy: i32) -> Tile {
        self.0.derive(dx, dy)
    }

    /// Tile at `(dx, dy)` from the base, on `plane`.
    #[must_use]
    pub const fn derive_on(self, dx: i32, dy: i32, plane: i32) -> Tile {
        self.0.derive_on(dx, dy, plane)
    }
}

impl From<Tile> for MapBase {
    fn from(tile: Tile) -> Self {
        Self(tile)
    }
}
