//! The scene store: object slots, live selections and host state.

use std::sync::Arc;

use hashbrown::HashSet;
use scene_geom::{MapBase, RelativeLocation, Tile};
use scene_proxy::{ObjectKind, RenderMode};
use tracing::debug;

use crate::object::ObjectRecord;
use crate::{
    ClientState, Entity, EntityAllocator, ObjectSnapshot, ObjectSpec, SceneError, SceneResult,
    Viewport,
};

/// Owns every scene object.
///
/// An object goes through three states:
///
/// - **live**: spawned and listed in the live selection of its kind
/// - **detached**: dropped from the selection but its key still resolves,
///   like a slot the renderer has let go of but not yet recycled
/// - **reclaimed**: slot freed and generation bumped; the key is dead
pub struct Scene {
    entities: EntityAllocator,
    slots: Vec<Option<ObjectRecord>>,
    live: [HashSet<Entity>; ObjectKind::ALL.len()],
    map_base: Option<MapBase>,
    render_mode: RenderMode,
    viewport: Viewport,
    client: Option<Arc<ClientState>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene in full 3D, with no region loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            slots: Vec::new(),
            live: Default::default(),
            map_base: None,
            render_mode: RenderMode::FULL_3D,
            viewport: Viewport::new(Tile::new(0, 0, 0), 0, 0, 1),
            client: None,
        }
    }

    // ==================== Objects ====================

    /// Insert a live object of `kind`.
    pub fn spawn(&mut self, kind: ObjectKind, spec: ObjectSpec) -> Entity {
        let entity = self.entities.allocate();
        let slot = entity.slot() as usize;
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }

        debug!(%entity, %kind, id = spec.id, "spawned");
        self.slots[slot] = Some(ObjectRecord {
            entity,
            kind,
            spec,
            live: true,
        });
        self.live[kind as usize].insert(entity);
        entity
    }

    /// Drop an object from its live selection. The key keeps resolving.
    pub fn detach(&mut self, entity: Entity) -> SceneResult<()> {
        let record = self.record_mut(entity)?;
        if !record.live {
            return Err(SceneError::AlreadyDetached(entity));
        }
        record.live = false;
        let kind = record.kind;
        self.live[kind as usize].remove(&entity);
        debug!(%entity, "detached");
        Ok(())
    }

    /// Free the slot. Every outstanding key for it stops resolving.
    pub fn reclaim(&mut self, entity: Entity) -> SceneResult<()> {
        let record = self.record_mut(entity)?;
        let kind = record.kind;
        self.live[kind as usize].remove(&entity);
        self.slots[entity.slot() as usize] = None;
        self.entities.deallocate(entity);
        debug!(%entity, "reclaimed");
        Ok(())
    }

    /// Reclaim every detached object. Returns how many were freed.
    pub fn collect_detached(&mut self) -> usize {
        let detached: Vec<Entity> = self
            .slots
            .iter()
            .flatten()
            .filter(|record| !record.live)
            .map(|record| record.entity)
            .collect();

        detached
            .into_iter()
            .filter(|entity| self.reclaim(*entity).is_ok())
            .count()
    }

    /// Move an object within the local frame.
    pub fn move_to(&mut self, entity: Entity, relative: RelativeLocation) -> SceneResult<()> {
        self.record_mut(entity)?.spec.relative = relative;
        Ok(())
    }

    /// Snapshot of the object `entity` refers to, if it still does.
    #[must_use]
    pub fn resolve(&self, entity: Entity) -> Option<ObjectSnapshot> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        let record = self.slots.get(entity.slot() as usize)?.as_ref()?;
        Some(ObjectSnapshot::new(record))
    }

    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Live keys of `kind`.
    #[must_use]
    pub fn live(&self, kind: ObjectKind) -> &HashSet<Entity> {
        &self.live[kind as usize]
    }

    /// Live keys of `kind` in slot order.
    #[must_use]
    pub fn live_sorted(&self, kind: ObjectKind) -> Vec<Entity> {
        let mut keys: Vec<Entity> = self.live(kind).iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Objects whose key still resolves, live or detached.
    #[must_use]
    pub fn object_count(&self) -> u32 {
        self.entities.alive_count()
    }

    // ==================== Host state ====================

    #[must_use]
    pub fn map_base(&self) -> Option<MapBase> {
        self.map_base
    }

    /// Load a region. Relative positions are re-interpreted from the new base.
    pub fn set_map_base(&mut self, base: Option<MapBase>) {
        debug!(?base, "map base changed");
        self.map_base = base;
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Switch the toolkit mode.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn client(&self) -> Option<Arc<ClientState>> {
        self.client.clone()
    }

    /// Install or remove the definition chain.
    pub fn set_client(&mut self, client: Option<ClientState>) {
        self.client = client.map(Arc::new);
    }

    fn record_mut(&mut self, entity: Entity) -> SceneResult<&mut ObjectRecord> {
        if !self.entities.is_alive(entity) {
            return Err(SceneError::Dead(entity));
        }
        self.slots
            .get_mut(entity.slot() as usize)
            .and_then(Option::as_mut)
            .ok_or(SceneError::Dead(entity))
    }
}
