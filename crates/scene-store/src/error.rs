//! Scene error types.

use thiserror::Error;

use crate::Entity;

/// Errors from scene mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The key no longer resolves.
    #[error("entity {0} has been reclaimed")]
    Dead(Entity),

    /// The object already left the live selection.
    #[error("entity {0} is already detached")]
    AlreadyDetached(Entity),
}

/// Result type for scene mutations.
pub type SceneResult<T> = Result<T, SceneError>;
