//! In-memory repository for tests and local demos. Same outcomes as the PostgreSQL one.

use crate::error::StoreError;
use crate::model::{NewRecord, Record};
use crate::repository::RecordRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Record>,
}

#[derive(Default)]
pub struct InMemoryRecordRepository {
    table: RwLock<Table>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn create(&self, new: NewRecord) -> Result<Record, StoreError> {
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        // Ids start at 1 and are never reused, like BIGSERIAL.
        table.next_id += 1;
        let record = new.with_id(table.next_id);
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Record, StoreError> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound { id })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        table.rows.remove(&id);
        Ok(())
    }

    async fn raw_query(&self) -> Result<Vec<Record>, StoreError> {
        self.list_all().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
