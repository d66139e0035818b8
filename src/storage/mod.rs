mod error;
pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::{validate_collection_name, CollectionStore, Record, COLLECTION_FORMAT_VERSION};
