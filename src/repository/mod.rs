//! Record persistence. Handlers never reach the store except through [`RecordRepository`].

mod in_memory;
mod postgres;

pub use in_memory::InMemoryRecordRepository;
pub use postgres::PgRecordRepository;

use crate::error::StoreError;
use crate::model::{NewRecord, Record};
use async_trait::async_trait;

/// Each method is a single self-contained statement; none holds a connection across calls.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert and return the row with its store-assigned id.
    async fn create(&self, new: NewRecord) -> Result<Record, StoreError>;

    /// All rows in store order. Empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// `StoreError::NotFound` when no row has `id`.
    async fn get_by_id(&self, id: i64) -> Result<Record, StoreError>;

    /// Deleting a missing id succeeds and affects nothing.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    /// Fixed raw statement, mapped by column name. Takes no caller input.
    async fn raw_query(&self) -> Result<Vec<Record>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
