//! Collaborator interfaces a host implements to back [`crate::ObjectProxy`].
//!
//! The host owns every world object. Proxies only ever see owned snapshots
//! returned by [`SceneHost::resolve`], so nothing here hands out references
//! into host storage.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use hashbrown::HashSet;
use scene_geom::{MapBase, Point, RelativeLocation, Tile};

use crate::{Client, ObjectKind, Rgba};

/// The host's toolkit mode.
///
/// Only [`RenderMode::FULL_3D`] exposes model geometry; every other mode
/// renders without models and proxies fall back to tile projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderMode(pub i32);

impl RenderMode {
    pub const FULL_3D: RenderMode = RenderMode(0);

    /// True when models are available.
    #[must_use]
    pub const fn is_full_3d(self) -> bool {
        self.0 == Self::FULL_3D.0
    }
}

/// Multi-tile footprint of an extended object, as corner offsets from the
/// map base in whole tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// A resolved snapshot of one world object.
pub trait WorldObject {
    type Key: Copy + Eq + Hash + fmt::Debug;

    /// Identity of the underlying object in the host store.
    fn key(&self) -> Self::Key;

    /// Definition id used for metadata lookup.
    fn id(&self) -> i32;

    /// Floor level the object sits on.
    fn plane(&self) -> i32;

    /// Position in the local frame, or [`RelativeLocation::NIL`] when the
    /// object carries no location data.
    fn relative(&self) -> RelativeLocation;

    /// `Some` only for extended objects spanning several tiles.
    fn footprint(&self) -> Option<Footprint> {
        None
    }
}

/// Screen-projected 3D model of an object.
pub trait Model {
    /// Screen centroid of one triangle. `None` for an out-of-range index or
    /// a triangle that is not on screen.
    fn centroid(&self, triangle: i32) -> Option<Point>;

    /// Index of the next triangle worth probing.
    fn next_triangle(&self) -> i32;

    fn next_point(&self) -> Point;

    fn center_point(&self) -> Point;

    fn contains(&self, point: Point) -> bool;

    fn draw_wireframe(&self, surface: &mut dyn Surface);
}

/// 2D projection of a single tile onto the screen.
pub trait TileMatrix {
    fn is_in_viewport(&self) -> bool;

    fn interact_point(&self) -> Point;

    fn next_point(&self) -> Point;

    fn center_point(&self) -> Point;

    fn contains(&self, point: Point) -> bool;
}

/// A render target for overlays.
pub trait Surface {
    fn set_color(&mut self, color: Rgba);

    /// Outline a closed polygon in the current color.
    fn draw_polygon(&mut self, points: &[Point]);
}

/// The scene graph, as seen by proxies.
///
/// Every method may observe a different state of the store than the previous
/// call; implementations must not assume callers hold any lock.
pub trait SceneHost {
    type Key: Copy + Eq + Hash + fmt::Debug;
    type Object: WorldObject<Key = Self::Key>;
    type Model: Model;
    type Matrix: TileMatrix;

    /// Resolve a weak key. `None` once the object has been reclaimed.
    fn resolve(&self, key: Self::Key) -> Option<Self::Object>;

    /// Keys of every object of `kind` the host currently considers live.
    fn live_selection(&self, kind: ObjectKind) -> HashSet<Self::Key>;

    /// Check whether `key` is in the live selection of `kind`.
    ///
    /// Hosts that can answer without materializing the whole selection
    /// should override this.
    fn is_live(&self, kind: ObjectKind, key: Self::Key) -> bool {
        self.live_selection(kind).contains(&key)
    }

    /// Origin of the loaded region, `None` before a region is loaded.
    fn map_base(&self) -> Option<MapBase>;

    /// Current toolkit mode.
    fn render_mode(&self) -> RenderMode;

    /// Model for a resolved object, if the host has one.
    fn model(&self, object: &Self::Object) -> Option<Self::Model>;

    /// Screen projection of `tile`.
    fn matrix(&self, tile: Tile) -> Self::Matrix;

    /// Root of the definition lookup chain.
    fn client(&self) -> Option<Arc<dyn Client>>;
}

impl<H: SceneHost + ?Sized> SceneHost for &H {
    type Key = H::Key;
    type Object = H::Object;
    type Model = H::Model;
    type Matrix = H::Matrix;

    fn resolve(&self, key: Self::Key) -> Option<Self::Object> {
        (**self).resolve(key)
    }

    fn live_selection(&self, kind: ObjectKind) -> HashSet<Self::Key> {
        (**self).live_selection(kind)
    }

    fn is_live(&self, kind: ObjectKind, key: Self::Key) -> bool {
        (**self).is_live(kind, key)
    }

    fn map_base(&self) -> Option<MapBase> {
        (**self).map_base()
    }

    fn render_mode(&self) -> RenderMode {
        (**self).render_mode()
    }

    fn model(&self, object: &Self::Object) -> Option<Self::Model> {
        (**self).model(object)
    }

    fn matrix(&self, tile: Tile) -> Self::Matrix {
        (**self).matrix(tile)
    }

    fn client(&self) -> Option<Arc<dyn Client>> {
        (**self).client()
    }
}
