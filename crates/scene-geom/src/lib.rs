//! Scene Geometry
//!
//! Absolute tile coordinates, fixed-point relative offsets and the transform
//! between them.
//!
//! # Key Concepts
//!
//! - **Tile**: absolute integer grid cell `(x, y, plane)`
//! - **RelativeLocation**: fixed-point offset (9 fractional bits) in the local frame
//! - **MapBase**: origin of the local frame, supplied by the host
//! - **Area**: axis-aligned box spanned by two tiles
//! - **Point**: screen-space pixel coordinate
//!
//! Unknown values are represented by `NIL` sentinels rather than `Option`,
//! so a despawned entity still answers every query with a plain value.

pub mod area;
pub mod point;
pub mod relative;
pub mod tile;

pub use area::Area;
pub use point::Point;
pub use relative::{FIXED_SCALE, FIXED_SHIFT, RelativeLocation, to_tile};
pub use tile::{MapBase, Tile};
