use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{paginate, sort_chronological, ExpenseStore, Page, StoreError};
use crate::models::{Expense, ExpenseDraft};

/// The fixed key the whole record set lives under.
const STORE_KEY: &str = "expenses";

/// Key-value store in a single SQLite file.
///
/// The entire record set is one JSON array in one row, read and rewritten
/// wholesale on every mutation. Operations complete synchronously and
/// resolve immediately when awaited.
pub struct LocalStore {
    conn: Mutex<Connection>,
}

impl LocalStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Default location for the store file, creating the data directory on
    /// demand.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let proj_dirs = directories::ProjectDirs::from("id", "catatan", "Catatan")
            .ok_or_else(|| StoreError::Config("could not determine data directory".into()))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir).map_err(|err| {
            StoreError::Config(format!("failed to create {}: {err}", data_dir.display()))
        })?;
        Ok(data_dir.join("catatan.db"))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn read_all(conn: &Connection) -> Result<Vec<Expense>, StoreError> {
        let stored: Option<String> = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![STORE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        match stored {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(conn: &Connection, records: &[Expense]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![STORE_KEY, json],
        )?;
        Ok(())
    }
}

#[async_trait]
impl ExpenseStore for LocalStore {
    async fn list(&self, page: usize, page_size: usize) -> Result<Page, StoreError> {
        let conn = self.conn()?;
        Ok(paginate(Self::read_all(&conn)?, page, page_size))
    }

    async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        let conn = self.conn()?;
        let mut records = Self::read_all(&conn)?;
        sort_chronological(&mut records);
        Ok(records)
    }

    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let conn = self.conn()?;
        let mut records = Self::read_all(&conn)?;
        let record = Expense::from_draft(draft);
        records.push(record.clone());
        Self::write_all(&conn, &records)?;
        debug!(id = %record.id, "created expense");
        Ok(record)
    }

    async fn update(&self, id: &str, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let conn = self.conn()?;
        let mut records = Self::read_all(&conn)?;
        let record = records
            .iter_mut()
            .find(|rec| rec.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply(draft);
        let updated = record.clone();
        Self::write_all(&conn, &records)?;
        debug!(id = %updated.id, "updated expense");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let mut records = Self::read_all(&conn)?;
        let before = records.len();
        records.retain(|rec| rec.id != id);
        if records.len() != before {
            Self::write_all(&conn, &records)?;
            debug!(id, "deleted expense");
        }
        Ok(())
    }
}
