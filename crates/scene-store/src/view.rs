//! Orthographic top-down view and the per-tile matrix derived from it.

use scene_geom::{FIXED_SHIFT, Point, Tile};
use scene_proxy::TileMatrix;

/// A rectangle of tiles on one plane, drawn `tile_px` pixels per tile.
///
/// Screen `(0, 0)` is the top-left corner of `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Tile,
    pub width: u32,
    pub height: u32,
    pub tile_px: i32,
}

impl Viewport {
    #[must_use]
    pub const fn new(origin: Tile, width: u32, height: u32, tile_px: i32) -> Self {
        Self {
            origin,
            width,
            height,
            tile_px,
        }
    }

    /// Screen size in pixels.
    #[must_use]
    pub const fn size(&self) -> (i32, i32) {
        (
            self.width as i32 * self.tile_px,
            self.height as i32 * self.tile_px,
        )
    }

    /// Check whether `tile` is inside the view rectangle on its plane.
    #[must_use]
    pub fn shows(&self, tile: Tile) -> bool {
        let dx = i64::from(tile.x) - i64::from(self.origin.x);
        let dy = i64::from(tile.y) - i64::from(self.origin.y);
        !tile.is_nil()
            && tile.plane == self.origin.plane
            && (0..i64::from(self.width)).contains(&dx)
            && (0..i64::from(self.height)).contains(&dy)
    }

    /// Check whether `point` is inside the screen.
    #[must_use]
    pub fn on_screen(&self, point: Point) -> bool {
        let (w, h) = self.size();
        (0..w).contains(&point.x) && (0..h).contains(&point.y)
    }

    /// Project an absolute fixed-point position with height `z` (also fixed
    /// point; up is negative screen y).
    #[must_use]
    pub fn project(&self, fx: i64, fy: i64, z: i32) -> Point {
        let px = i64::from(self.tile_px);
        let ox = i64::from(self.origin.x) << FIXED_SHIFT;
        let oy = i64::from(self.origin.y) << FIXED_SHIFT;
        let x = ((fx - ox) * px) >> FIXED_SHIFT;
        let y = ((fy - oy - i64::from(z)) * px) >> FIXED_SHIFT;
        Point::new(saturate(x), saturate(y))
    }

    /// Top-left pixel of a tile. Wraps for tiles far outside the view.
    #[must_use]
    pub const fn tile_corner(&self, tile: Tile) -> Point {
        Point::new(
            tile.x.wrapping_sub(self.origin.x).wrapping_mul(self.tile_px),
            tile.y.wrapping_sub(self.origin.y).wrapping_mul(self.tile_px),
        )
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Screen footprint of a single tile.
#[derive(Clone, Copy, Debug)]
pub struct GridMatrix {
    tile: Tile,
    view: Viewport,
}

impl GridMatrix {
    #[must_use]
    pub const fn new(tile: Tile, view: Viewport) -> Self {
        Self { tile, view }
    }

    fn corner(&self) -> Point {
        self.view.tile_corner(self.tile)
    }

    /// Corner offset by `inset` on both axes, offscreen unless visible.
    fn inset(&self, inset: i32) -> Point {
        if !self.is_in_viewport() {
            return Point::OFFSCREEN;
        }
        let corner = self.corner();
        Point::new(corner.x + inset, corner.y + inset)
    }
}

impl TileMatrix for GridMatrix {
    fn is_in_viewport(&self) -> bool {
        self.view.shows(self.tile)
    }

    fn interact_point(&self) -> Point {
        self.center_point()
    }

    /// A quarter of the way into the tile from its corner.
    fn next_point(&self) -> Point {
        self.inset(self.view.tile_px / 4)
    }

    fn center_point(&self) -> Point {
        self.inset(self.view.tile_px / 2)
    }

    fn contains(&self, point: Point) -> bool {
        if !self.is_in_viewport() {
            return false;
        }
        let corner = self.corner();
        (corner.x..corner.x + self.view.tile_px).contains(&point.x)
            && (corner.y..corner.y + self.view.tile_px).contains(&point.y)
    }
}
