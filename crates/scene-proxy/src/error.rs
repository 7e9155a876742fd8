//! Error types.
//!
//! None of these reach callers of the proxy's query methods: lookups collapse
//! a [`DefinitionGap`] into the unknown definition. They are public so hosts
//! and diagnostics can ask *why* a lookup came back empty.

use thiserror::Error;

/// The stage at which a definition lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionGap {
    /// The proxy's key no longer resolves.
    #[error("object has despawned")]
    Despawned,

    /// No client is attached to the host.
    #[error("no client attached")]
    NoClient,

    /// The client has no ground info loaded.
    #[error("client has no ground info")]
    NoGroundInfo,

    /// Ground info has no object definition loader.
    #[error("ground info has no object definition loader")]
    NoObjectLoader,

    /// The loader has no cache.
    #[error("definition loader has no cache")]
    NoCache,

    /// The cache has no backing table.
    #[error("definition cache has no table")]
    NoTable,

    /// The table has no record for this id.
    #[error("no definition record for id {id}")]
    Missing { id: i32 },

    /// The record under this id is some other kind of definition.
    #[error("record for id {id} is a {kind} definition, not an object definition")]
    WrongKind { id: i32, kind: String },
}

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A zero default alpha would make every overlay invisible.
    #[error("default_alpha must be nonzero")]
    InvalidAlpha,
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
