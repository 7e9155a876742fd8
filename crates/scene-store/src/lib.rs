//! Scene Store - in-memory scene graph for scene proxies
//!
//! A reference host for [`scene_proxy`]: it owns objects in generational
//! slots, keeps a live selection per [`ObjectKind`], and exposes the map
//! base, render mode, viewport and definition chain proxies consult.
//!
//! # Example
//!
//! ```ignore
//! let shared = SharedScene::new(Scene::new());
//! shared.write().set_map_base(Some(MapBase::new(3000, 4000, 0)));
//! let door = shared.write().spawn(
//!     ObjectKind::Boundary,
//!     ObjectSpec::new(42).at(RelativeLocation::new(1024, 2048)),
//! );
//!
//! let proxy = shared.proxy(door, ObjectKind::Boundary);
//! assert_eq!(proxy.location(), Tile::new(3002, 4004, 0));
//!
//! shared.write().reclaim(door)?;
//! assert_eq!(proxy.id(), -1);
//! ```
//!
//! [`ObjectKind`]: scene_proxy::ObjectKind

mod definitions;
mod entity;
mod error;
mod model;
mod object;
mod scene;
mod shared;
mod view;

pub use definitions::{ClientState, DefinitionTable, Stage};
pub use entity::{Entity, EntityAllocator, Generation};
pub use error::{SceneError, SceneResult};
pub use model::{BoxModel, Mesh, Vertex};
pub use object::{ObjectSnapshot, ObjectSpec};
pub use scene::Scene;
pub use shared::SharedScene;
pub use view::{GridMatrix, Viewport};
