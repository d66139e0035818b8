use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The only failure a collection store reports: the medium could not be
/// read, decoded or durably written.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable ({context}): {source}")]
    Unavailable {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    pub fn unavailable(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        StorageError::Unavailable {
            context: context.into(),
            source: source.into(),
        }
    }
}
