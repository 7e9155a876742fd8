//! Thread-safe handle to a scene, and the host implementation proxies use.

use std::sync::Arc;

use hashbrown::HashSet;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use scene_geom::{MapBase, Tile};
use scene_proxy::{
    Client, ObjectKind, ObjectProxy, ProxyConfig, RenderMode, SceneHost, WorldObject,
};

use crate::{BoxModel, Entity, GridMatrix, ObjectSnapshot, Scene};

/// Cloneable handle to a scene that an update loop mutates while proxies
/// query it from other threads.
///
/// Every host call takes the read lock only for its own duration; nothing
/// is held between calls.
#[derive(Clone, Default)]
pub struct SharedScene {
    inner: Arc<RwLock<Scene>>,
    config: Arc<ProxyConfig>,
}

impl SharedScene {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self::with_config(scene, ProxyConfig::default())
    }

    /// Share `scene`, building proxies with `config`.
    #[must_use]
    pub fn with_config(scene: Scene, config: ProxyConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(scene)),
            config: Arc::new(config),
        }
    }

    /// Lock for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Scene> {
        self.inner.read()
    }

    /// Lock for writing. Do not hold across proxy calls.
    pub fn write(&self) -> RwLockWriteGuard<'_, Scene> {
        self.inner.write()
    }

    /// Proxy for a key obtained elsewhere.
    #[must_use]
    pub fn proxy(&self, entity: Entity, kind: ObjectKind) -> ObjectProxy<SharedScene> {
        ObjectProxy::with_config(self.clone(), entity, kind, Arc::clone(&self.config))
    }

    /// Proxies for every live object of `kind`, in slot order.
    #[must_use]
    pub fn select(&self, kind: ObjectKind) -> Vec<ObjectProxy<SharedScene>> {
        let keys = self.read().live_sorted(kind);
        keys.into_iter()
            .map(|entity| self.proxy(entity, kind))
            .collect()
    }

    /// Proxies for every live object of any kind.
    #[must_use]
    pub fn select_all(&self) -> Vec<ObjectProxy<SharedScene>> {
        ObjectKind::ALL
            .into_iter()
            .flat_map(|kind| self.select(kind))
            .collect()
    }
}

impl SceneHost for SharedScene {
    type Key = Entity;
    type Object = ObjectSnapshot;
    type Model = BoxModel;
    type Matrix = GridMatrix;

    fn resolve(&self, key: Entity) -> Option<ObjectSnapshot> {
        self.read().resolve(key)
    }

    fn live_selection(&self, kind: ObjectKind) -> HashSet<Entity> {
        self.read().live(kind).clone()
    }

    fn is_live(&self, kind: ObjectKind, key: Entity) -> bool {
        self.read().live(kind).contains(&key)
    }

    fn map_base(&self) -> Option<MapBase> {
        self.read().map_base()
    }

    fn render_mode(&self) -> RenderMode {
        self.read().render_mode()
    }

    fn model(&self, object: &ObjectSnapshot) -> Option<BoxModel> {
        let mesh = object.mesh()?;
        let scene = self.read();
        let base = scene.map_base()?;
        Some(BoxModel::project(
            mesh,
            object.relative(),
            object.plane(),
            base,
            scene.viewport(),
        ))
    }

    fn matrix(&self, tile: Tile) -> GridMatrix {
        GridMatrix::new(tile, self.read().viewport())
    }

    fn client(&self) -> Option<Arc<dyn Client>> {
        self.read()
            .client()
            .map(|client| client as Arc<dyn Client>)
    }
}
