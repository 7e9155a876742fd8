//! Location, area and screen geometry of a proxy.
//!
//! Screen points resolve through a fixed chain:
//!
//! 1. the object's model, when the host renders in full 3D
//! 2. the 2D tile matrix, when the object's tile is in the viewport
//! 3. [`Point::OFFSCREEN`] (or `false` for containment)
//!
//! Each query takes one fresh snapshot of the object, so a despawn between
//! two queries is observed by the second one.

use std::sync::atomic::Ordering;

use scene_geom::{Area, Point, RelativeLocation, Tile, to_tile};
use tracing::debug;

use crate::{Model, ObjectProxy, SceneHost, TileMatrix, WorldObject};

impl<H: SceneHost> ObjectProxy<H> {
    /// Fixed-point position in the host's local frame.
    #[must_use]
    pub fn relative(&self) -> RelativeLocation {
        self.resolve()
            .map_or(RelativeLocation::NIL, |object| object.relative())
    }

    /// Absolute tile, [`Tile::NIL`] when absent or before a region loads.
    #[must_use]
    pub fn location(&self) -> Tile {
        self.resolve()
            .map_or(Tile::NIL, |object| self.location_of(&object))
    }

    /// Tiles covered by the object.
    ///
    /// Extended objects span their footprint on the object's plane; anything
    /// else is a single-tile area at [`Self::location`].
    #[must_use]
    pub fn area(&self) -> Area {
        let Some(object) = self.resolve() else {
            return Area::point(Tile::NIL);
        };
        match (object.footprint(), self.host.map_base()) {
            (Some(fp), Some(base)) => Area::new(
                base.derive_on(fp.x1, fp.y1, object.plane()),
                base.derive_on(fp.x2, fp.y2, object.plane()),
            ),
            _ => Area::point(self.location_of(&object)),
        }
    }

    /// True while the object's tile is visible.
    #[must_use]
    pub fn is_in_viewport(&self) -> bool {
        self.visible_matrix().is_some()
    }

    /// A point to click on.
    ///
    /// Tries the centroid of the hinted triangle, then one fresh candidate
    /// from the model, before falling back to the tile matrix.
    #[must_use]
    pub fn interact_point(&self) -> Point {
        if let Some(point) = self.model().and_then(|model| self.hinted_centroid(&model)) {
            return point;
        }
        self.visible_matrix()
            .map_or(Point::OFFSCREEN, |matrix| matrix.interact_point())
    }

    /// Next candidate point from the model or tile.
    #[must_use]
    pub fn next_point(&self) -> Point {
        if let Some(model) = self.model() {
            return model.next_point();
        }
        self.visible_matrix()
            .map_or(Point::OFFSCREEN, |matrix| matrix.next_point())
    }

    /// Screen center of the model or tile.
    #[must_use]
    pub fn center_point(&self) -> Point {
        if let Some(model) = self.model() {
            return model.center_point();
        }
        self.visible_matrix()
            .map_or(Point::OFFSCREEN, |matrix| matrix.center_point())
    }

    /// Check whether `point` lies on the object.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if let Some(model) = self.model() {
            return model.contains(point);
        }
        self.visible_matrix()
            .is_some_and(|matrix| matrix.contains(point))
    }

    /// Current triangle hint, `-1` before any centroid was found.
    #[must_use]
    pub fn triangle_hint(&self) -> i32 {
        self.triangle_hint.load(Ordering::Relaxed)
    }

    fn location_of(&self, object: &H::Object) -> Tile {
        self.host
            .map_base()
            .map_or(Tile::NIL, |base| to_tile(object.relative(), object.plane(), base))
    }

    fn visible_matrix(&self) -> Option<H::Matrix> {
        let tile = self.location();
        if tile.is_nil() {
            return None;
        }
        let matrix = self.host.matrix(tile);
        matrix.is_in_viewport().then_some(matrix)
    }

    fn hinted_centroid(&self, model: &H::Model) -> Option<Point> {
        let hint = self.triangle_hint.load(Ordering::Relaxed);
        if let Some(point) = model.centroid(hint) {
            return Some(point);
        }

        let candidate = model.next_triangle();
        let point = model.centroid(candidate)?;
        if candidate != hint {
            debug!(handle = ?self.handle(), hint, candidate, "triangle hint moved");
            self.triangle_hint.store(candidate, Ordering::Relaxed);
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        MODEL_CENTER, MODEL_INSIDE, MODEL_NEXT, MockHost, MockModel, MockObject, init_tracing,
    };
    use crate::{Footprint, ObjectKind, RenderMode};
    use scene_geom::MapBase;

    const KIND: ObjectKind = ObjectKind::Interactive;

    fn host_with(object: MockObject) -> MockHost {
        init_tracing();
        MockHost::default().with_live(object, KIND)
    }

    #[test]
    fn location_scenario() {
        let host = host_with(MockObject::new(1, 42).at(1024, 2048));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert_eq!(proxy.location(), Tile::new(3002, 4004, 0));
        assert_eq!(proxy.relative(), RelativeLocation::new(1024, 2048));
    }

    #[test]
    fn location_wraps_near_the_coordinate_limit() {
        let host = host_with(MockObject::new(1, 42).at(512 * 20, 0));
        host.set_map_base(Some(MapBase::new(i32::MAX - 10, 4000, 0)));
        let proxy = ObjectProxy::new(&host, 1, KIND);

        let wrapped = Tile::new(i32::MIN + 9, 4000, 0);
        assert_eq!(proxy.location(), wrapped);
        assert_eq!(proxy.area(), Area::point(wrapped));
        assert_eq!(proxy.interact_point(), Point::new(wrapped.x, wrapped.y));
    }

    #[test]
    fn footprint_at_the_coordinate_limit() {
        let footprint = Footprint {
            x1: i32::MAX - 1,
            y1: 0,
            x2: i32::MAX,
            y2: 1,
        };
        let host = host_with(MockObject::new(1, 42).at(0, 0).spanning(footprint));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert!(!proxy.area().is_nil());

        host.set_map_base(Some(MapBase::new(0, 0, 0)));
        let area = proxy.area();
        assert_eq!(area.start(), Tile::new(i32::MAX - 1, 0, 0));
        assert_eq!(area.end(), Tile::new(i32::MAX, 1, 0));
        assert_eq!(area.size(), (2, 2));
        assert_eq!(area.tiles().count(), 4);
    }

    #[test]
    fn location_uses_object_plane() {
        let host = host_with(MockObject::new(1, 42).at(512, 0).on_plane(2));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert_eq!(proxy.location(), Tile::new(3001, 4000, 2));
    }

    #[test]
    fn location_nil_without_data_or_base() {
        let host = host_with(MockObject::new(1, 42));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert!(proxy.location().is_nil());
        assert!(proxy.relative().is_nil());

        let host = host_with(MockObject::new(1, 42).at(0, 0));
        host.set_map_base(None);
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert!(proxy.location().is_nil());
    }

    #[test]
    fn absent_geometry() {
        let host = MockHost::default();
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert!(proxy.location().is_nil());
        assert!(proxy.relative().is_nil());
        assert!(proxy.area().is_nil());
        assert!(!proxy.is_in_viewport());
        assert!(proxy.interact_point().is_offscreen());
        assert!(proxy.next_point().is_offscreen());
        assert!(proxy.center_point().is_offscreen());
        assert!(!proxy.contains(Point::new(3002, 4004)));
    }

    #[test]
    fn area_degenerates_to_location() {
        let host = host_with(MockObject::new(1, 42).at(1024, 2048));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        let area = proxy.area();
        assert!(area.is_point());
        assert_eq!(area.start(), proxy.location());
        assert_eq!(area.end(), proxy.location());
    }

    #[test]
    fn extended_area_spans_footprint() {
        let footprint = Footprint {
            x1: 10,
            y1: 20,
            x2: 12,
            y2: 21,
        };
        let host = host_with(
            MockObject::new(1, 42)
                .at(10 * 512, 20 * 512)
                .on_plane(1)
                .spanning(footprint),
        );
        let proxy = ObjectProxy::new(&host, 1, KIND);
        let area = proxy.area();
        assert_eq!(area.start(), Tile::new(3010, 4020, 1));
        assert_eq!(area.end(), Tile::new(3012, 4021, 1));
        assert!(area.contains(proxy.location()));
    }

    #[test]
    fn extended_area_follows_map_base() {
        let footprint = Footprint {
            x1: 1,
            y1: 1,
            x2: 2,
            y2: 2,
        };
        let host = host_with(MockObject::new(1, 42).at(512, 512).spanning(footprint));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        host.set_map_base(Some(MapBase::new(100, 200, 0)));
        assert_eq!(proxy.area().start(), Tile::new(101, 201, 0));
    }

    #[test]
    fn hinted_centroid_skips_probe() {
        let model = MockModel::default()
            .centroid_at(2, Point::new(321, 123))
            .next_candidate(5);
        let host = host_with(MockObject::new(1, 42).at(0, 0).with_custom_model(model.clone()));
        let proxy = ObjectProxy::new(&host, 1, KIND);
        proxy.triangle_hint.store(2, Ordering::Relaxed);

        assert_eq!(proxy.interact_point(), Point::new(321, 123));
        assert_eq!(model.probes(), 0);
        assert_eq!(proxy.triangle_hint(), 2);
    }

    #[test]
    fn probe_once_and_cache_hint() {
        let model = MockModel::default()
            .centroid_at(7, Point::new(77, 77))
            .next_candidate(7);
        let host = host_with(MockObject::new(1, 42).at(0, 0).with_custom_model(model.clone()));
        let proxy = ObjectProxy::new(&host, 1, KIND);

        assert_eq!(proxy.interact_point(), Point::new(77, 77));
        assert_eq!(model.probes(), 1);
        assert_eq!(proxy.triangle_hint(), 7);

        assert_eq!(proxy.interact_point(), Point::new(77, 77));
        assert_eq!(model.probes(), 1);
    }

    #[test]
    fn centroid_miss_probes_once_then_projects() {
        let model = MockModel::default().next_candidate(3);
        let host = host_with(MockObject::new(1, 42).at(1024, 2048).with_custom_model(model.clone()));
        let proxy = ObjectProxy::new(&host, 1, KIND);

        assert_eq!(proxy.interact_point(), Point::new(3002, 4004));
        assert_eq!(model.probes(), 1);
        assert_eq!(proxy.triangle_hint(), -1);
    }

    #[test]
    fn centroid_miss_offscreen() {
        let model = MockModel::default().next_candidate(3);
        let host = host_with(MockObject::new(1, 42).at(1024, 2048).with_custom_model(model));
        host.set_visible(false);
        let proxy = ObjectProxy::new(&host, 1, KIND);
        assert!(proxy.interact_point().is_offscreen());
    }

    #[test]
    fn model_answers_directly() {
        let host = host_with(MockObject::new(1, 42).at(1024, 2048).with_model());
        host.set_visible(false);
        let proxy = ObjectProxy::new(&host, 1, KIND);

        assert_eq!(proxy.next_point(), MODEL_NEXT);
        assert_eq!(proxy.center_point(), MODEL_CENTER);
        assert!(proxy.contains(MODEL_INSIDE));
        assert!(!proxy.contains(Point::new(3002, 4004)));
        assert_eq!(proxy.interact_point(), Point::new(400, 400));
    }

    #[test]
    fn projection_without_model() {
        let host = host_with(MockObject::new(1, 42).at(1024, 2048).with_model());
        host.set_render_mode(RenderMode(2));
        let proxy = ObjectProxy::new(&host, 1, KIND);

        assert!(proxy.is_in_viewport());
        assert_eq!(proxy.interact_point(), Point::new(3002, 4004));
        assert_eq!(proxy.next_point(), Point::new(3003, 4005));
        assert_eq!(proxy.center_point(), Point::new(3004, 4006));
        assert!(proxy.contains(Point::new(3002, 4004)));
        assert!(!proxy.contains(MODEL_INSIDE));
    }

    #[test]
    fn offscreen_without_model_or_viewport() {
        let host = host_with(MockObject::new(1, 42).at(1024, 2048));
        host.set_visible(false);
        let proxy = ObjectProxy::new(&host, 1, KIND);

        assert!(!proxy.is_in_viewport());
        assert!(proxy.interact_point().is_offscreen());
        assert!(proxy.next_point().is_offscreen());
        assert!(proxy.center_point().is_offscreen());
        assert!(!proxy.contains(Point::new(3002, 4004)));
    }
}
