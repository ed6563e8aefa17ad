//! Catatan, the data core of a personal expense diary.
//!
//! Three pieces: typed expense records ([`models`]), two interchangeable
//! record stores behind one async trait ([`store`]), and the pure
//! aggregation functions that feed the trend/category charts and summary
//! cards ([`chart`]). Rendering is the consumer's job; this crate only
//! hands over ordered pages and bucketed sums.

pub mod chart;
pub mod format;
pub mod models;
pub mod store;

pub use models::{Category, DraftError, Expense, ExpenseDraft, TimeRange};
pub use store::{open, ExpenseStore, LocalStore, Page, RemoteStore, StoreConfig, StoreError};
