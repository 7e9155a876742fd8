//! Stored scene objects and the snapshots proxies resolve to.

use std::sync::Arc;

use scene_geom::RelativeLocation;
use scene_proxy::{Footprint, ObjectKind, WorldObject};

use crate::{Entity, Mesh};

/// Everything needed to place an object in the scene.
#[derive(Clone, Debug)]
pub struct ObjectSpec {
    pub id: i32,
    pub plane: i32,
    pub relative: RelativeLocation,
    pub footprint: Option<Footprint>,
    pub mesh: Option<Arc<Mesh>>,
}

impl ObjectSpec {
    /// Object with definition `id`, no location, on plane 0.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self {
            id,
            plane: 0,
            relative: RelativeLocation::NIL,
            footprint: None,
            mesh: None,
        }
    }

    /// Place at a fixed-point position in the local frame.
    #[must_use]
    pub fn at(mut self, relative: RelativeLocation) -> Self {
        self.relative = relative;
        self
    }

    /// Place on `plane`.
    #[must_use]
    pub fn on_plane(mut self, plane: i32) -> Self {
        self.plane = plane;
        self
    }

    /// Mark as an extended object covering `footprint`.
    #[must_use]
    pub fn spanning(mut self, footprint: Footprint) -> Self {
        self.footprint = Some(footprint);
        self
    }

    /// Attach a shared mesh.
    #[must_use]
    pub fn with_mesh(mut self, mesh: Arc<Mesh>) -> Self {
        self.mesh = Some(mesh);
        self
    }
}

/// Slot contents for a resolvable object.
#[derive(Clone, Debug)]
pub(crate) struct ObjectRecord {
    pub entity: Entity,
    pub kind: ObjectKind,
    pub spec: ObjectSpec,
    /// Still in the live selection of `kind`.
    pub live: bool,
}

/// Owned copy of an object taken at resolve time.
#[derive(Clone, Debug)]
pub struct ObjectSnapshot {
    entity: Entity,
    kind: ObjectKind,
    spec: ObjectSpec,
}

impl ObjectSnapshot {
    pub(crate) fn new(record: &ObjectRecord) -> Self {
        Self {
            entity: record.entity,
            kind: record.kind,
            spec: record.spec.clone(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Mesh of the object, if it has one.
    #[must_use]
    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.spec.mesh.as_ref()
    }
}

impl WorldObject for ObjectSnapshot {
    type Key = Entity;

    fn key(&self) -> Entity {
        self.entity
    }

    fn id(&self) -> i32 {
        self.spec.id
    }

    fn plane(&self) -> i32 {
        self.spec.plane
    }

    fn relative(&self) -> RelativeLocation {
        self.spec.relative
    }

    fn footprint(&self) -> Option<Footprint> {
        self.spec.footprint
    }
}
