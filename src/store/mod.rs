mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Expense, ExpenseDraft};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("expense not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("remote store rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },
    #[error("store lock poisoned")]
    Poisoned,
    #[error("invalid store configuration: {0}")]
    Config(String),
}

/// A page of records, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Expense>,
    pub total: usize,
    pub total_pages: usize,
}

/// The record store behind the expense history and charts. Implementations
/// differ only in where the bytes live; ordering and pagination follow one
/// policy, shared below.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// One page of the record set, sorted by date descending. Pages are
    /// 1-indexed.
    async fn list(&self, page: usize, page_size: usize) -> Result<Page, StoreError>;

    /// The whole record set sorted by date ascending, ready for the trend
    /// bucketer.
    async fn list_all(&self) -> Result<Vec<Expense>, StoreError>;

    /// Persist a new record with a fresh id and creation timestamp, and
    /// return it as stored.
    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, StoreError>;

    /// Replace the mutable fields of the record with this id, keeping its
    /// id and creation timestamp. Fails with [`StoreError::NotFound`] if no
    /// such record exists.
    async fn update(&self, id: &str, draft: ExpenseDraft) -> Result<Expense, StoreError>;

    /// Idempotent: deleting an id that was never stored (or was already
    /// deleted) succeeds.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Which backing store to open.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Single-file store on this machine.
    Local { path: PathBuf },
    /// Document collection reachable over HTTP. `collection` namespaces the
    /// records and only has to be non-empty.
    Remote { base_url: String, collection: String },
}

/// Open the configured backend. Callers hold the returned handle and pass
/// it where it is needed; there is no ambient store.
pub fn open(config: StoreConfig) -> Result<Box<dyn ExpenseStore>, StoreError> {
    match config {
        StoreConfig::Local { path } => Ok(Box::new(LocalStore::open(&path)?)),
        StoreConfig::Remote {
            base_url,
            collection,
        } => Ok(Box::new(RemoteStore::new(&base_url, &collection)?)),
    }
}

/// Newest-first slice of the full set. `page` is 1-indexed; an empty set
/// still reports one (empty) page.
pub(crate) fn paginate(mut records: Vec<Expense>, page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    // Stable sort: records sharing a date keep their stored order.
    records.sort_by(|a, b| b.date.cmp(&a.date));
    let total = records.len();
    let total_pages = if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    };
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = records.into_iter().skip(start).take(page_size).collect();
    Page {
        items,
        total,
        total_pages,
    }
}

pub(crate) fn sort_chronological(records: &mut [Expense]) {
    records.sort_by(|a, b| a.date.cmp(&b.date));
}
