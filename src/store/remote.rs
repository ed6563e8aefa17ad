use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, Response, StatusCode, Url};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{paginate, sort_chronological, ExpenseStore, Page, StoreError};
use crate::models::{Expense, ExpenseDraft};

/// Wire form of a stored document: every record field except the id, which
/// is the document's key in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseDoc {
    pub(crate) date: NaiveDate,
    pub(crate) category: String,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) created_at: DateTime<Utc>,
}

impl ExpenseDoc {
    pub(crate) fn from_record(record: &Expense) -> Self {
        Self {
            date: record.date,
            category: record.category.clone(),
            description: record.description.clone(),
            amount: record.amount,
            created_at: record.created_at,
        }
    }

    pub(crate) fn into_record(self, id: String) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            description: self.description,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// Client for a JSON document collection: one document per record, the
/// record id in the path. Sorting and pagination happen here, on the
/// fetched set, through the same helpers as the local backend.
pub struct RemoteStore {
    base_url: Url,
    collection: String,
    http: Client,
}

impl RemoteStore {
    /// `collection` namespaces the documents; it only has to be non-empty.
    pub fn new(base_url: &str, collection: &str) -> Result<Self, StoreError> {
        let collection = collection.trim();
        if collection.is_empty() {
            return Err(StoreError::Config("collection name must not be empty".into()));
        }
        // A trailing slash keeps Url::join from replacing the last path
        // segment of the base.
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&base).map_err(|err| StoreError::Config(format!("invalid base url: {err}")))?;
        Ok(Self {
            base_url,
            collection: collection.to_string(),
            http: Client::new(),
        })
    }

    pub(crate) fn collection_url(&self) -> Result<Url, StoreError> {
        self.join(&format!("{}.json", self.collection))
    }

    pub(crate) fn doc_url(&self, id: &str) -> Result<Url, StoreError> {
        self.join(&format!("{}/{}.json", self.collection, id))
    }

    fn join(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|err| StoreError::Config(format!("invalid store url: {err}")))
    }

    async fn fetch_all(&self) -> Result<Vec<Expense>, StoreError> {
        let res = self.http.get(self.collection_url()?).send().await?;
        // An empty collection comes back as a JSON `null` body.
        let docs: Option<BTreeMap<String, ExpenseDoc>> = Self::check(res).await?.json().await?;
        Ok(docs
            .unwrap_or_default()
            .into_iter()
            .map(|(id, doc)| doc.into_record(id))
            .collect())
    }

    async fn check(res: Response) -> Result<Response, StoreError> {
        if res.status().is_success() {
            return Ok(res);
        }
        let status = res.status().as_u16();
        let message = res
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(StoreError::Remote { status, message })
    }
}

#[async_trait]
impl ExpenseStore for RemoteStore {
    async fn list(&self, page: usize, page_size: usize) -> Result<Page, StoreError> {
        Ok(paginate(self.fetch_all().await?, page, page_size))
    }

    async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        let mut records = self.fetch_all().await?;
        sort_chronological(&mut records);
        Ok(records)
    }

    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let record = Expense::from_draft(draft);
        let res = self
            .http
            .put(self.doc_url(&record.id)?)
            .json(&ExpenseDoc::from_record(&record))
            .send()
            .await?;
        Self::check(res).await?;
        debug!(id = %record.id, collection = %self.collection, "created expense document");
        Ok(record)
    }

    async fn update(&self, id: &str, draft: ExpenseDraft) -> Result<Expense, StoreError> {
        let url = self.doc_url(id)?;
        let res = self.http.get(url.clone()).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let existing: Option<ExpenseDoc> = Self::check(res).await?.json().await?;
        let Some(existing) = existing else {
            return Err(StoreError::NotFound(id.to_string()));
        };

        // PATCH merges the four mutable fields into the document; the
        // stored creation timestamp is untouched.
        let res = self.http.patch(url).json(&draft).send().await?;
        Self::check(res).await?;
        debug!(id, collection = %self.collection, "updated expense document");

        let mut record = existing.into_record(id.to_string());
        record.apply(draft);
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let res = self.http.delete(self.doc_url(id)?).send().await?;
        Self::check(res).await?;
        debug!(id, collection = %self.collection, "deleted expense document");
        Ok(())
    }
}
