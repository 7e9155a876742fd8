//! Layered definition cache: client → ground info → loader → cache → table.
//!
//! Each layer is immutable once built. The scene swaps whole chains, so a
//! lookup that already holds an `Arc` to a layer keeps a consistent view.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use scene_proxy::{
    CacheRecord, CacheTable, Client, DefinitionCache, DefinitionLoader, GroundInfo,
    ObjectDefinition,
};

/// A layer of the chain, used to build chains that stop short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    GroundInfo,
    ObjectLoader,
    Cache,
    Table,
}

/// Records keyed by definition id.
#[derive(Clone, Debug, Default)]
pub struct DefinitionTable {
    records: FxHashMap<i32, CacheRecord>,
}

impl DefinitionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object definition under `id`.
    #[must_use]
    pub fn with_object(mut self, id: i32, definition: ObjectDefinition) -> Self {
        self.records.insert(id, CacheRecord::Object(definition));
        self
    }

    /// Store a record of some other definition kind under `id`.
    #[must_use]
    pub fn with_foreign(mut self, id: i32, kind: impl Into<String>) -> Self {
        self.records.insert(id, CacheRecord::Other(kind.into()));
        self
    }
}

impl CacheTable for DefinitionTable {
    fn lookup(&self, id: i32) -> Option<CacheRecord> {
        self.records.get(&id).cloned()
    }
}

#[derive(Debug)]
struct CacheLayer {
    table: Option<Arc<DefinitionTable>>,
}

impl DefinitionCache for CacheLayer {
    fn table(&self) -> Option<Arc<dyn CacheTable>> {
        self.table
            .clone()
            .map(|table| table as Arc<dyn CacheTable>)
    }
}

#[derive(Debug)]
struct LoaderLayer {
    cache: Option<Arc<CacheLayer>>,
}

impl DefinitionLoader for LoaderLayer {
    fn cache(&self) -> Option<Arc<dyn DefinitionCache>> {
        self.cache
            .clone()
            .map(|cache| cache as Arc<dyn DefinitionCache>)
    }
}

#[derive(Debug)]
struct GroundLayer {
    loader: Option<Arc<LoaderLayer>>,
}

impl GroundInfo for GroundLayer {
    fn object_loader(&self) -> Option<Arc<dyn DefinitionLoader>> {
        self.loader
            .clone()
            .map(|loader| loader as Arc<dyn DefinitionLoader>)
    }
}

/// Root of a definition chain.
#[derive(Debug)]
pub struct ClientState {
    ground_info: Option<Arc<GroundLayer>>,
}

impl ClientState {
    /// A fully loaded chain over `table`.
    #[must_use]
    pub fn loaded(table: DefinitionTable) -> Self {
        Self::build(Some(table), None)
    }

    /// A chain whose `missing` layer, and everything below it, is absent.
    #[must_use]
    pub fn missing(missing: Stage, table: DefinitionTable) -> Self {
        Self::build(Some(table), Some(missing))
    }

    fn build(table: Option<DefinitionTable>, missing: Option<Stage>) -> Self {
        let keep = |stage: Stage| missing.is_none_or(|m| (m as u8) > (stage as u8));

        let table = table.filter(|_| keep(Stage::Table)).map(Arc::new);
        let cache = keep(Stage::Cache).then(|| Arc::new(CacheLayer { table }));
        let loader = keep(Stage::ObjectLoader).then(|| Arc::new(LoaderLayer { cache }));
        let ground_info = keep(Stage::GroundInfo).then(|| Arc::new(GroundLayer { loader }));
        Self { ground_info }
    }
}

impl Client for ClientState {
    fn ground_info(&self) -> Option<Arc<dyn GroundInfo>> {
        self.ground_info
            .clone()
            .map(|info| info as Arc<dyn GroundInfo>)
    }
}
