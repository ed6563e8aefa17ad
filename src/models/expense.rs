use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// One stored expense entry.
///
/// Records are immutable after creation except through a full
/// [`ExpenseDraft`] replacement; `id` and `created_at` never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Materialize a draft into a stored record with a fresh identity.
    pub(crate) fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            category: draft.category,
            description: draft.description,
            amount: draft.amount,
            created_at: Utc::now(),
        }
    }

    /// Replace the four mutable fields, keeping identity and creation time.
    pub(crate) fn apply(&mut self, draft: ExpenseDraft) {
        self.date = draft.date;
        self.category = draft.category;
        self.description = draft.description;
        self.amount = draft.amount;
    }
}

/// Rejected form input. Raised before any storage call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    Empty(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("amount must not be negative")]
    NegativeAmount,
}

/// The four fields a caller may set on a record: everything except
/// identity and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseDraft {
    pub fn new(date: NaiveDate, category: String, description: String, amount: Decimal) -> Self {
        Self {
            date,
            category,
            description,
            amount,
        }
    }

    /// Validate raw form input. The date is `YYYY-MM-DD`; the amount must
    /// parse as a non-negative number.
    pub fn parse(
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<Self, DraftError> {
        let date = date.trim();
        let category = category.trim();
        let description = description.trim();
        let amount = amount.trim();

        if date.is_empty() {
            return Err(DraftError::Empty("date"));
        }
        if category.is_empty() {
            return Err(DraftError::Empty("category"));
        }
        if description.is_empty() {
            return Err(DraftError::Empty("description"));
        }
        if amount.is_empty() {
            return Err(DraftError::Empty("amount"));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(date.to_string()))?;
        let amount = Decimal::from_str(amount)
            .map_err(|_| DraftError::InvalidAmount(amount.to_string()))?;
        if amount < Decimal::ZERO {
            return Err(DraftError::NegativeAmount);
        }

        Ok(Self {
            date,
            category: category.to_string(),
            description: description.to_string(),
            amount,
        })
    }
}
