//! The proxy itself: identity, liveness, metadata and drawing.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, LazyLock};

use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::{
    DefinitionGap, Model, ObjectDefinition, ObjectKind, ProxyConfig, SceneHost, Surface,
    WorldObject, lookup_definition,
};

static DEFAULT_CONFIG: LazyLock<Arc<ProxyConfig>> = LazyLock::new(Arc::default);

/// Triangle hint value meaning "nothing cached yet".
pub(crate) const NO_TRIANGLE: i32 = -1;

/// Where a proxy sits in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProxyState {
    /// Resolves and is in the host's live selection.
    Live,
    /// Resolves, but the host no longer lists it as live.
    StaleHandle,
    /// No longer resolves.
    Absent,
}

/// A weak, re-resolving handle to a world object owned by `H`.
///
/// Equality and hashing follow the *resolved* object, not the proxy: two
/// proxies for the same live object are equal, and a proxy whose key no
/// longer resolves is equal to nothing, itself included. For that reason
/// the type implements `PartialEq` but not `Eq`.
pub struct ObjectProxy<H: SceneHost> {
    pub(crate) host: H,
    handle: H::Key,
    kind: ObjectKind,
    /// Last triangle whose centroid was on screen.
    pub(crate) triangle_hint: AtomicI32,
    config: Arc<ProxyConfig>,
}

impl<H: SceneHost> ObjectProxy<H> {
    /// Proxy using the shared default [`ProxyConfig`].
    pub fn new(host: H, handle: H::Key, kind: ObjectKind) -> Self {
        Self::with_config(host, handle, kind, Arc::clone(&DEFAULT_CONFIG))
    }

    /// Proxy drawing with `config`.
    pub fn with_config(
        host: H,
        handle: H::Key,
        kind: ObjectKind,
        config: Arc<ProxyConfig>,
    ) -> Self {
        Self {
            host,
            handle,
            kind,
            triangle_hint: AtomicI32::new(NO_TRIANGLE),
            config,
        }
    }

    /// The weak key this proxy was built from.
    #[must_use]
    pub fn handle(&self) -> H::Key {
        self.handle
    }

    /// Kind tag fixed at construction.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Fresh snapshot of the underlying object.
    #[must_use]
    pub fn resolve(&self) -> Option<H::Object> {
        self.host.resolve(self.handle)
    }

    /// Identity of the resolved object, `None` once it no longer resolves.
    #[must_use]
    pub fn identity(&self) -> Option<H::Key> {
        self.resolve().map(|object| object.key())
    }

    /// Definition id, `-1` when absent.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.resolve().map_or(-1, |object| object.id())
    }

    /// Plane of the object, `-1` when absent.
    #[must_use]
    pub fn plane(&self) -> i32 {
        self.resolve().map_or(-1, |object| object.plane())
    }

    /// The object's model, available only while the host renders in full 3D.
    #[must_use]
    pub fn model(&self) -> Option<H::Model> {
        if !self.host.render_mode().is_full_3d() {
            return None;
        }
        let object = self.resolve()?;
        self.host.model(&object)
    }

    /// True while the key resolves and the host lists the object as live.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state() == ProxyState::Live
    }

    /// Current lifecycle state, re-read from the host.
    #[must_use]
    pub fn state(&self) -> ProxyState {
        let Some(key) = self.identity() else {
            return ProxyState::Absent;
        };
        if self.host.is_live(self.kind, key) {
            ProxyState::Live
        } else {
            ProxyState::StaleHandle
        }
    }

    /// Resolve the definition, reporting which stage came up empty.
    pub fn try_definition(&self) -> Result<ObjectDefinition, DefinitionGap> {
        let object = self.resolve().ok_or(DefinitionGap::Despawned)?;
        lookup_definition(self.host.client(), object.id())
    }

    /// The object's definition, or [`ObjectDefinition::unknown`].
    #[must_use]
    pub fn definition(&self) -> ObjectDefinition {
        self.try_definition().unwrap_or_else(|gap| {
            trace!(handle = ?self.handle, %gap, "definition unavailable");
            ObjectDefinition::unknown()
        })
    }

    /// Definition name, empty when unknown.
    #[must_use]
    pub fn name(&self) -> String {
        self.definition().name().to_owned()
    }

    /// Definition actions in order, empty when unknown.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.definition().actions().to_vec()
    }

    /// Hash of the resolved identity, `0` when absent.
    #[must_use]
    pub fn identity_hash(&self) -> u64 {
        self.identity().map_or(0, |key| FxBuildHasher.hash_one(key))
    }

    /// Outline the model in the highlight color with `alpha` substituted.
    ///
    /// Does nothing when no model resolves.
    pub fn draw(&self, surface: &mut dyn Surface, alpha: u8) {
        let Some(model) = self.model() else {
            trace!(handle = ?self.handle, "no model to draw");
            return;
        };
        surface.set_color(self.config.highlight.with_alpha(alpha));
        model.draw_wireframe(surface);
    }

    /// [`Self::draw`] with the configured default alpha.
    pub fn draw_default(&self, surface: &mut dyn Surface) {
        self.draw(surface, self.config.default_alpha);
    }
}

impl<H: SceneHost + Clone> Clone for ObjectProxy<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            handle: self.handle,
            kind: self.kind,
            triangle_hint: AtomicI32::new(self.triangle_hint.load(Ordering::Relaxed)),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: SceneHost> PartialEq for ObjectProxy<H> {
    fn eq(&self, other: &Self) -> bool {
        self.identity()
            .is_some_and(|key| other.identity() == Some(key))
    }
}

impl<H: SceneHost> Hash for ObjectProxy<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_u64(self.identity_hash());
    }
}

impl<H: SceneHost> fmt::Debug for ObjectProxy<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectProxy")
            .field("handle", &self.handle)
            .field("kind", &self.kind)
            .field("triangle_hint", &self.triangle_hint.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
