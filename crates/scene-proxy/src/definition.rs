//! Static object metadata and the cache chain it is loaded through.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::DefinitionGap;

/// Name and menu actions of an object type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ObjectDefinition {
    name: String,
    actions: SmallVec<[String; 5]>,
}

impl ObjectDefinition {
    /// Definition with `name` and its ordered `actions`.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// Placeholder for an object whose definition could not be found.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// True for the placeholder returned when lookup fails.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty() && self.actions.is_empty()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Menu actions in display order.
    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

/// A record stored in a definition cache table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheRecord {
    Object(ObjectDefinition),
    /// Any other definition type sharing the table, tagged by kind.
    Other(String),
}

pub trait Client: Send + Sync {
    /// Ground-level services, absent before login.
    fn ground_info(&self) -> Option<Arc<dyn GroundInfo>>;
}

pub trait GroundInfo: Send + Sync {
    /// Loader for object definitions.
    fn object_loader(&self) -> Option<Arc<dyn DefinitionLoader>>;
}

pub trait DefinitionLoader: Send + Sync {
    /// Cache the loader reads from.
    fn cache(&self) -> Option<Arc<dyn DefinitionCache>>;
}

pub trait DefinitionCache: Send + Sync {
    /// Backing table of the cache.
    fn table(&self) -> Option<Arc<dyn CacheTable>>;
}

pub trait CacheTable: Send + Sync {
    /// Record stored under `id`, of whatever definition kind.
    fn lookup(&self, id: i32) -> Option<CacheRecord>;
}

/// Walk the chain from `client` down to the record for `id`.
///
/// Each stage is held by `Arc` for the duration of the walk, so a host
/// swapping a stage out mid-lookup cannot invalidate it.
pub fn lookup_definition(
    client: Option<Arc<dyn Client>>,
    id: i32,
) -> Result<ObjectDefinition, DefinitionGap> {
    let client = client.ok_or(DefinitionGap::NoClient)?;
    let info = client.ground_info().ok_or(DefinitionGap::NoGroundInfo)?;
    let loader = info.object_loader().ok_or(DefinitionGap::NoObjectLoader)?;
    let cache = loader.cache().ok_or(DefinitionGap::NoCache)?;
    let table = cache.table().ok_or(DefinitionGap::NoTable)?;

    match table.lookup(id) {
        Some(CacheRecord::Object(def)) => Ok(def),
        Some(CacheRecord::Other(kind)) => Err(DefinitionGap::WrongKind { id, kind }),
        None => Err(DefinitionGap::Missing { id }),
    }
}
