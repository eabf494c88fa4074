//! Relational backend on an embedded SQLite database.

use super::{BackendKind, ItemBackend};
use crate::error::{Result, StorageError};
use rusqlite::{params, Connection, ErrorCode};
use std::fs;
use std::path::{Path, PathBuf};
use stockroom_core::{InventoryItem, ItemId, ItemStatus};
use tracing::{debug, warn};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS inventory (
        id         TEXT PRIMARY KEY,
        name       TEXT NOT NULL,
        category   TEXT NOT NULL,
        quantity   REAL NOT NULL DEFAULT 0,
        unitPrice  REAL NOT NULL DEFAULT 0,
        totalValue REAL NOT NULL DEFAULT 0,
        dateAdded  TEXT NOT NULL,
        status     TEXT NOT NULL DEFAULT 'In Stock'
    );
";

/// Stores items as rows of an `inventory` table
///
/// Each save rewrites the table inside one transaction, so the table always
/// holds exactly the last saved collection. Row order follows insertion order.
pub struct SqliteItemBackend {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteItemBackend {
    /// Open (or create) a database file
    ///
    /// A file that is not a SQLite database is moved aside to
    /// `<name>.corrupt` and replaced by a fresh, empty database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::open_file(path) {
            Err(StorageError::Sql(rusqlite::Error::SqliteFailure(e, _)))
                if matches!(e.code, ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt) =>
            {
                let aside = corrupt_path(path);
                warn!(
                    path = %path.display(),
                    moved_to = %aside.display(),
                    "inventory database unreadable, starting fresh"
                );
                fs::rename(path, &aside)?;
                Self::open_file(path)
            }
            other => other,
        }
    }

    /// Create a database that lives only in memory
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, path: None })
    }

    /// Database file path, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn open_file(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %path.display(), "opened sqlite inventory backend");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

/// Column values of the wrong type mean the table holds data this backend
/// never wrote; treat them like an unparseable blob.
fn decode_error(e: rusqlite::Error) -> StorageError {
    match e {
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::Utf8Error(..) => StorageError::Corrupt {
            key: "inventory".to_string(),
            reason: e.to_string(),
        },
        other => StorageError::Sql(other),
    }
}

impl ItemBackend for SqliteItemBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    fn load(&mut self) -> Result<Vec<InventoryItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, quantity, unitPrice, totalValue, dateAdded, status
             FROM inventory ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
            ))
        })?;

        let mut items = Vec::new();
        for row in rows {
            let (id, name, category, quantity, unit_price, total_value, date_added, status) =
                row.map_err(decode_error)?;
            let status: ItemStatus = status.parse().map_err(|e| StorageError::Corrupt {
                key: "inventory".to_string(),
                reason: format!("row {}: {}", id, e),
            })?;
            items.push(InventoryItem {
                id: ItemId::from(id),
                name,
                category,
                quantity,
                unit_price,
                total_value,
                date_added,
                status,
            });
        }
        Ok(items)
    }

    fn save(&mut self, items: &[InventoryItem]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM inventory", [])?;
        {
            let mut insert = tx.prepare_cached(
                "INSERT INTO inventory
                 (id, name, category, quantity, unitPrice, totalValue, dateAdded, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for item in items {
                insert.execute(params![
                    item.id.as_str(),
                    item.name,
                    item.category,
                    item.quantity,
                    item.unit_price,
                    item.total_value,
                    item.date_added,
                    item.status.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
