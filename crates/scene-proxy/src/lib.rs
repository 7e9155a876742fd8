//! Scene Proxy - live handles over externally owned world objects
//!
//! An [`ObjectProxy`] never owns the object it describes. It stores a weak
//! key and re-resolves it through a [`SceneHost`] on every query, so the host
//! is free to mutate or evict the object at any time.
//!
//! # Lifecycle
//!
//! ```text
//! LIVE ──────────► STALE-HANDLE ──────────► ABSENT
//! (resolves, in     (resolves, left the      (key no longer
//!  live selection)   live selection)          resolves)
//! ```
//!
//! Transitions are driven only by the host. Every query on an `ABSENT` proxy
//! answers with a sentinel (`-1`, [`Tile::NIL`], [`Point::OFFSCREEN`], the
//! unknown definition, `false`) instead of failing.
//!
//! # Geometry
//!
//! Interaction points come from the 3D model when the host renders in full
//! 3D, otherwise from the 2D tile matrix when the tile is in the viewport,
//! otherwise [`Point::OFFSCREEN`].

mod color;
mod config;
mod definition;
mod error;
mod geometry;
mod host;
mod kind;
mod proxy;
mod traits;

#[cfg(test)]
mod testing;

pub use color::Rgba;
pub use config::ProxyConfig;
pub use definition::{
    CacheRecord, CacheTable, Client, DefinitionCache, DefinitionLoader, GroundInfo,
    ObjectDefinition, lookup_definition,
};
pub use error::{ConfigError, ConfigResult, DefinitionGap};
pub use host::{Footprint, Model, RenderMode, SceneHost, Surface, TileMatrix, WorldObject};
pub use kind::ObjectKind;
pub use proxy::{ObjectProxy, ProxyState};
pub use traits::{
    Drawable, Identifiable, Interactive, Locatable, Nameable, Renderable, nearest,
};

pub use scene_geom::{Area, MapBase, Point, RelativeLocation, Tile};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Area, Drawable, Identifiable, Interactive, Locatable, Nameable, ObjectKind, ObjectProxy,
        Point, Renderable, SceneHost, Tile,
    };
}
