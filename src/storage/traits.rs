use super::StorageError;

/// A stored record. The store never looks inside it.
pub type Record = serde_json::Value;

/// Format version written alongside every collection.
pub const COLLECTION_FORMAT_VERSION: i64 = 1;

/// Durable storage of named, ordered collections with whole-collection
/// read/replace semantics.
pub trait CollectionStore {
    /// Returns the stored sequence, or an empty one if `collection` was never
    /// written.
    fn read_all(&self, collection: &str) -> Result<Vec<Record>, StorageError>;

    /// Atomically replaces the stored sequence. On error the previous value is
    /// left untouched.
    fn write_all(&self, collection: &str, records: &[Record]) -> Result<(), StorageError>;
}

/// Collection names double as file names for [`super::FileStorage`].
pub fn validate_collection_name(collection: &str) -> Result<(), StorageError> {
    let valid = !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::unavailable(
            format!("collection {collection:?}"),
            "invalid collection name",
        ))
    }
}

pub(crate) fn check_format_version(collection: &str, version: i64) -> Result<(), StorageError> {
    if version > COLLECTION_FORMAT_VERSION {
        return Err(StorageError::unavailable(
            format!("collection {collection}"),
            format!(
                "unsupported collection format version {version} (max {COLLECTION_FORMAT_VERSION})"
            ),
        ));
    }
    Ok(())
}
