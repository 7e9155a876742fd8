//! Fixed-point offsets relative to the map base.

use crate::{MapBase, Tile};

/// Number of fractional bits in a relative coordinate.
pub const FIXED_SHIFT: u32 = 9;

/// Fixed-point units per tile (`1 << FIXED_SHIFT`).
pub const FIXED_SCALE: i32 = 1 << FIXED_SHIFT;

/// A fixed-point position in the host's local frame.
///
/// Each axis carries `FIXED_SHIFT` fractional bits, so `512` is one tile.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct RelativeLocation {
    pub x: i32,
    pub y: i32,
}

impl RelativeLocation {
    /// Sentinel for "no location data".
    ///
    /// `(i32::MIN, i32::MIN)` is reserved: it lies about four million tiles
    /// from the base, far outside any loaded region, so hosts never report it
    /// as a real offset. A host that needs that exact value cannot express it.
    pub const NIL: RelativeLocation = RelativeLocation {
        x: i32::MIN,
        y: i32::MIN,
    };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position at the south-west corner of the given local tile.
    #[must_use]
    pub const fn from_tile(tile_x: i32, tile_y: i32) -> Self {
        Self {
            x: tile_x << FIXED_SHIFT,
            y: tile_y << FIXED_SHIFT,
        }
    }

    /// Check for the [`RelativeLocation::NIL`] sentinel.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.x == Self::NIL.x && self.y == Self::NIL.y
    }

    /// Local tile containing this position.
    ///
    /// Arithmetic shift, so negative offsets floor toward the previous tile.
    #[must_use]
    pub const fn local_tile(self) -> (i32, i32) {
        (self.x >> FIXED_SHIFT, self.y >> FIXED_SHIFT)
    }
}

/// Convert a relative position on `plane` into an absolute tile.
///
/// Returns [`Tile::NIL`] when `relative` is `NIL`.
#[must_use]
pub const fn to_tile(relative: RelativeLocation, plane: i32, base: MapBase) -> Tile {
    if relative.is_nil() {
        return Tile::NIL;
    }
    let (dx, dy) = relative.local_tile();
    base.derive_on(dx, dy, plane)
}
