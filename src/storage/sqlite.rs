use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{
    traits::{check_format_version, validate_collection_name},
    CollectionStore, Record, StorageError, COLLECTION_FORMAT_VERSION,
};

const DB_SCHEMA_VERSION: i64 = 1;

/// SQLite-backed collection store. Each collection is a single row, so a
/// replace is a single upsert and is atomic by construction.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub path: String,
}

fn db_read_collection(conn: &Connection, name: &str) -> rusqlite::Result<Option<(i64, String)>> {
    conn.query_row(
        "SELECT version, records FROM collections WHERE name = ?1",
        params![name],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
}

fn db_write_collection(
    conn: &Connection,
    name: &str,
    version: i64,
    records: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO collections (name, version, records) VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET version=excluded.version, records=excluded.records",
        params![name, version, records],
    )?;
    Ok(())
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Deletes the database together with its WAL side files.
    pub fn reset_all(&self) -> Result<(), StorageError> {
        for suffix in ["", "-wal", "-shm"] {
            let file = format!("{}{}", self.path, suffix);
            if !Path::new(&file).exists() {
                continue;
            }
            std::fs::remove_file(&file)
                .map_err(|err| StorageError::unavailable(format!("removing {file}"), err))?;
        }
        Ok(())
    }

    pub fn init(&self) -> Result<(), StorageError> {
        self.with_conn(|_conn| Ok(()))
            .map_err(|err| StorageError::unavailable(format!("opening {}", self.path), err))
    }

    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "FULL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;

        Self::migrate(&conn)?;
        f(&conn)
    }

    fn migrate(conn: &Connection) -> rusqlite::Result<()> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version == DB_SCHEMA_VERSION {
            return Ok(());
        }

        log::info!(
            "SQLite schema migration: {} -> {}",
            version,
            DB_SCHEMA_VERSION
        );

        if version == 0 {
            conn.execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS collections (
                name TEXT PRIMARY KEY,
                version INTEGER NOT NULL,
                records TEXT NOT NULL
            );
        "#,
            )?;
            conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
            return Ok(());
        }

        Err(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::ErrorCode::SchemaChanged as i32),
            Some("database schema version mismatch; please run with --reset option".to_string()),
        ))
    }
}

impl CollectionStore for SqliteStorage {
    fn read_all(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        validate_collection_name(collection)?;
        let context = || format!("reading collection {collection}");

        let row = self
            .with_conn(|conn| db_read_collection(conn, collection))
            .map_err(|err| StorageError::unavailable(context(), err))?;
        let Some((version, body)) = row else {
            return Ok(Vec::new());
        };
        check_format_version(collection, version)?;
        serde_json::from_str(&body).map_err(|err| StorageError::unavailable(context(), err))
    }

    fn write_all(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        validate_collection_name(collection)?;
        let context = || format!("writing collection {collection}");

        let body = serde_json::to_string(records)
            .map_err(|err| StorageError::unavailable(context(), err))?;
        self.with_conn(|conn| {
            db_write_collection(conn, collection, COLLECTION_FORMAT_VERSION, &body)
        })
        .map_err(|err| StorageError::unavailable(context(), err))
    }
}
