//! Record orchestration between handlers and the repository.

use crate::error::StoreError;
use crate::model::{NewRecord, Record};
use crate::repository::RecordRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// What the HTTP layer may ask of the record domain. Cross-field validation,
/// authorization and multi-repository transactions belong behind this trait.
#[async_trait]
pub trait RecordService: Send + Sync {
    async fn create_record(&self, new: NewRecord) -> Result<Record, StoreError>;
    async fn list_records(&self) -> Result<Vec<Record>, StoreError>;
    async fn get_record(&self, id: i64) -> Result<Record, StoreError>;
    async fn delete_record(&self, id: i64) -> Result<(), StoreError>;
    async fn raw_records(&self) -> Result<Vec<Record>, StoreError>;
    async fn ready(&self) -> Result<(), StoreError>;
}

/// Pass-through over any [`RecordRepository`].
#[derive(Clone)]
pub struct Records {
    repo: Arc<dyn RecordRepository>,
}

impl Records {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Records { repo }
    }
}

#[async_trait]
impl RecordService for Records {
    async fn create_record(&self, new: NewRecord) -> Result<Record, StoreError> {
        self.repo.create(new).await
    }

    async fn list_records(&self) -> Result<Vec<Record>, StoreError> {
        self.repo.list_all().await
    }

    async fn get_record(&self, id: i64) -> Result<Record, StoreError> {
        self.repo.get_by_id(id).await
    }

    async fn delete_record(&self, id: i64) -> Result<(), StoreError> {
        self.repo.delete_by_id(id).await
    }

    async fn raw_records(&self) -> Result<Vec<Record>, StoreError> {
        self.repo.raw_query().await
    }

    async fn ready(&self) -> Result<(), StoreError> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRecordRepository;

    #[tokio::test]
    async fn forwards_to_repository() {
        let repo = Arc::new(InMemoryRecordRepository::new());
        let svc = Records::new(repo.clone());

        let created = svc.create_record(NewRecord::new("x")).await.unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(svc.get_record(created.id).await.unwrap(), created);
        assert_eq!(svc.list_records().await.unwrap(), vec![created.clone()]);
        assert_eq!(svc.raw_records().await.unwrap(), vec![created.clone()]);

        svc.delete_record(created.id).await.unwrap();
        assert!(repo.is_empty());
        svc.ready().await.unwrap();
    }
}
