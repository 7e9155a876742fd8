//! In-crate doubles for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use hashbrown::HashSet;
use scene_geom::{MapBase, Point, RelativeLocation, Tile};

use crate::{
    CacheRecord, CacheTable, Client, DefinitionCache, DefinitionLoader, Footprint, GroundInfo,
    Model, ObjectKind, RenderMode, Rgba, SceneHost, Surface, TileMatrix, WorldObject,
};

/// Install the fmt subscriber once per test binary. `RUST_LOG` selects
/// the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const MODEL_NEXT: Point = Point::new(500, 500);
pub const MODEL_CENTER: Point = Point::new(510, 510);
pub const MODEL_INSIDE: Point = Point::new(505, 505);

#[derive(Clone, Debug, Default)]
pub struct MockModel {
    centroids: BTreeMap<i32, Point>,
    next: i32,
    probes: Rc<Cell<u32>>,
}

impl MockModel {
    pub fn centroid_at(mut self, triangle: i32, point: Point) -> Self {
        self.centroids.insert(triangle, point);
        self
    }

    pub fn next_candidate(mut self, triangle: i32) -> Self {
        self.next = triangle;
        self
    }

    /// Number of `next_triangle` calls across every clone of this model.
    pub fn probes(&self) -> u32 {
        self.probes.get()
    }
}

impl Model for MockModel {
    fn centroid(&self, triangle: i32) -> Option<Point> {
        self.centroids.get(&triangle).copied()
    }

    fn next_triangle(&self) -> i32 {
        self.probes.set(self.probes.get() + 1);
        self.next
    }

    fn next_point(&self) -> Point {
        MODEL_NEXT
    }

    fn center_point(&self) -> Point {
        MODEL_CENTER
    }

    fn contains(&self, point: Point) -> bool {
        point == MODEL_INSIDE
    }

    fn draw_wireframe(&self, surface: &mut dyn Surface) {
        surface.draw_polygon(&[MODEL_NEXT, MODEL_CENTER, MODEL_INSIDE]);
    }
}

#[derive(Clone, Debug)]
pub struct MockObject {
    key: u32,
    id: i32,
    plane: i32,
    relative: RelativeLocation,
    footprint: Option<Footprint>,
    model: Option<MockModel>,
}

impl MockObject {
    pub fn new(key: u32, id: i32) -> Self {
        Self {
            key,
            id,
            plane: 0,
            relative: RelativeLocation::NIL,
            footprint: None,
            model: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.relative = RelativeLocation::new(x, y);
        self
    }

    pub fn on_plane(mut self, plane: i32) -> Self {
        self.plane = plane;
        self
    }

    pub fn spanning(mut self, footprint: Footprint) -> Self {
        self.footprint = Some(footprint);
        self
    }

    pub fn with_model(self) -> Self {
        self.with_custom_model(MockModel::default().centroid_at(0, Point::new(400, 400)))
    }

    pub fn with_custom_model(mut self, model: MockModel) -> Self {
        self.model = Some(model);
        self
    }
}

impl WorldObject for MockObject {
    type Key = u32;

    fn key(&self) -> u32 {
        self.key
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn plane(&self) -> i32 {
        self.plane
    }

    fn relative(&self) -> RelativeLocation {
        self.relative
    }

    fn footprint(&self) -> Option<Footprint> {
        self.footprint
    }
}

/// Projects a tile to `(x, y)` on screen; the next/center points are offset
/// by one and two pixels.
#[derive(Clone, Copy, Debug)]
pub struct MockMatrix {
    tile: Tile,
    visible: bool,
}

impl TileMatrix for MockMatrix {
    fn is_in_viewport(&self) -> bool {
        self.visible
    }

    fn interact_point(&self) -> Point {
        Point::new(self.tile.x, self.tile.y)
    }

    fn next_point(&self) -> Point {
        Point::new(self.tile.x.wrapping_add(1), self.tile.y.wrapping_add(1))
    }

    fn center_point(&self) -> Point {
        Point::new(self.tile.x.wrapping_add(2), self.tile.y.wrapping_add(2))
    }

    fn contains(&self, point: Point) -> bool {
        point == self.interact_point()
    }
}

pub struct MockHost {
    objects: RefCell<BTreeMap<u32, (MockObject, ObjectKind)>>,
    live: RefCell<HashSet<u32>>,
    base: Cell<Option<MapBase>>,
    mode: Cell<RenderMode>,
    visible: Cell<bool>,
    client: RefCell<Option<Arc<dyn Client>>>,
    selection_queries: Cell<u32>,
    membership_queries: Cell<u32>,
    model_queries: Cell<u32>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            objects: RefCell::default(),
            live: RefCell::default(),
            base: Cell::new(Some(MapBase::new(3000, 4000, 0))),
            mode: Cell::new(RenderMode::FULL_3D),
            visible: Cell::new(true),
            client: RefCell::new(None),
            selection_queries: Cell::new(0),
            membership_queries: Cell::new(0),
            model_queries: Cell::new(0),
        }
    }
}

impl MockHost {
    pub fn with_live(self, object: MockObject, kind: ObjectKind) -> Self {
        self.live.borrow_mut().insert(object.key);
        self.objects.borrow_mut().insert(object.key, (object, kind));
        self
    }

    pub fn with_client(self, client: Arc<dyn Client>) -> Self {
        *self.client.borrow_mut() = Some(client);
        self
    }

    pub fn set_map_base(&self, base: Option<MapBase>) {
        self.base.set(base);
    }

    pub fn set_render_mode(&self, mode: RenderMode) {
        self.mode.set(mode);
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Drop from the live selection but keep resolvable.
    pub fn detach(&self, key: u32) {
        self.live.borrow_mut().remove(&key);
    }

    pub fn remove(&self, key: u32) {
        self.detach(key);
        self.objects.borrow_mut().remove(&key);
    }

    /// Unresolvable but still listed, as a lagging selection would report.
    pub fn remove_keep_listed(&self, key: u32) {
        self.objects.borrow_mut().remove(&key);
    }

    pub fn selection_queries(&self) -> u32 {
        self.selection_queries.get()
    }

    pub fn membership_queries(&self) -> u32 {
        self.membership_queries.get()
    }

    pub fn model_queries(&self) -> u32 {
        self.model_queries.get()
    }
}

impl SceneHost for MockHost {
    type Key = u32;
    type Object = MockObject;
    type Model = MockModel;
    type Matrix = MockMatrix;

    fn resolve(&self, key: u32) -> Option<MockObject> {
        self.objects.borrow().get(&key).map(|(object, _)| object.clone())
    }

    fn live_selection(&self, kind: ObjectKind) -> HashSet<u32> {
        self.selection_queries.set(self.selection_queries.get() + 1);
        let objects = self.objects.borrow();
        self.live
            .borrow()
            .iter()
            .copied()
            .filter(|key| objects.get(key).is_none_or(|(_, k)| *k == kind))
            .collect()
    }

    fn is_live(&self, kind: ObjectKind, key: u32) -> bool {
        self.membership_queries.set(self.membership_queries.get() + 1);
        self.live.borrow().contains(&key)
            && self
                .objects
                .borrow()
                .get(&key)
                .is_none_or(|(_, k)| *k == kind)
    }

    fn map_base(&self) -> Option<MapBase> {
        self.base.get()
    }

    fn render_mode(&self) -> RenderMode {
        self.mode.get()
    }

    fn model(&self, object: &MockObject) -> Option<MockModel> {
        self.model_queries.set(self.model_queries.get() + 1);
        object.model.clone()
    }

    fn matrix(&self, tile: Tile) -> MockMatrix {
        MockMatrix {
            tile,
            visible: self.visible.get(),
        }
    }

    fn client(&self) -> Option<Arc<dyn Client>> {
        self.client.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub colors: Vec<Rgba>,
    pub polygons: Vec<Vec<Point>>,
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: Rgba) {
        self.colors.push(color);
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.polygons.push(points.to_vec());
    }
}

/// A definition chain where any stage can be knocked out.
#[derive(Clone, Default)]
pub struct Chain {
    ground_info: bool,
    loader: bool,
    cache: bool,
    table: Option<Arc<BTreeMap<i32, CacheRecord>>>,
}

impl Chain {
    pub fn full(records: impl IntoIterator<Item = (i32, CacheRecord)>) -> Self {
        Self {
            ground_info: true,
            loader: true,
            cache: true,
            table: Some(Arc::new(records.into_iter().collect())),
        }
    }

    pub fn without_ground_info(mut self) -> Self {
        self.ground_info = false;
        self
    }

    pub fn without_loader(mut self) -> Self {
        self.loader = false;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = false;
        self
    }

    pub fn without_table(mut self) -> Self {
        self.table = None;
        self
    }
}

pub fn client_with(chain: Chain) -> Arc<dyn Client> {
    Arc::new(chain)
}

impl Client for Chain {
    fn ground_info(&self) -> Option<Arc<dyn GroundInfo>> {
        self.ground_info
            .then(|| Arc::new(self.clone()) as Arc<dyn GroundInfo>)
    }
}

impl GroundInfo for Chain {
    fn object_loader(&self) -> Option<Arc<dyn DefinitionLoader>> {
        self.loader
            .then(|| Arc::new(self.clone()) as Arc<dyn DefinitionLoader>)
    }
}

impl DefinitionLoader for Chain {
    fn cache(&self) -> Option<Arc<dyn DefinitionCache>> {
        self.cache
            .then(|| Arc::new(self.clone()) as Arc<dyn DefinitionCache>)
    }
}

impl DefinitionCache for Chain {
    fn table(&self) -> Option<Arc<dyn CacheTable>> {
        self.table
            .clone()
            .map(|table| Arc::new(Table(table)) as Arc<dyn CacheTable>)
    }
}

struct Table(Arc<BTreeMap<i32, CacheRecord>>);

impl CacheTable for Table {
    fn lookup(&self, id: i32) -> Option<CacheRecord> {
        self.0.get(&id).cloned()
    }
}
