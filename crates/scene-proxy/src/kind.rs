//! Object classification.

use std::fmt;

/// Which scene layer an object was selected from.
///
/// Assigned once when the proxy is built and never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectKind {
    /// Free-standing interactive object (doors, trees, furnaces).
    Interactive = 0,
    /// Wall or fence segment on a tile edge.
    Boundary = 1,
    /// Decoration mounted on a boundary.
    WallDecoration = 2,
    /// Decoration lying on the floor of a tile.
    FloorDecoration = 3,
    Unknown = 4,
}

impl ObjectKind {
    /// All kinds in selection order.
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Interactive,
        ObjectKind::Boundary,
        ObjectKind::WallDecoration,
        ObjectKind::FloorDecoration,
        ObjectKind::Unknown,
    ];

    /// Lowercase name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Boundary => "boundary",
            Self::WallDecoration => "wall_decoration",
            Self::FloorDecoration => "floor_decoration",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
