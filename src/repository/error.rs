use std::fmt;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Site,
    Inspection,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Site => f.write_str("site"),
            Entity::Inspection => f.write_str("inspection"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },
    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),
    #[error("persistence error: malformed record in collection {collection}: {source}")]
    Malformed {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RepositoryError {
    pub fn not_found(entity: Entity, id: impl fmt::Display) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    /// Store failures and undecodable stored records.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RepositoryError::Persistence(_) | RepositoryError::Malformed { .. }
        )
    }
}
