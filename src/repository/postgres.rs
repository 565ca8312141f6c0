//! PostgreSQL repository over the shared pool.

use crate::error::StoreError;
use crate::model::{NewRecord, Record};
use crate::repository::RecordRepository;
use crate::sql::{NamedQueries, LIST_RECORDS_RAW};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct PgRecordRepository {
    pool: PgPool,
    statement_timeout: Duration,
    queries: Arc<NamedQueries>,
}

impl PgRecordRepository {
    pub fn new(pool: PgPool, statement_timeout: Duration, queries: Arc<NamedQueries>) -> Self {
        PgRecordRepository {
            pool,
            statement_timeout,
            queries,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        with_deadline(self.statement_timeout, call).await
    }
}

/// Bound a store call by `limit`. The call is cancelled (dropped) on expiry.
async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn create(&self, new: NewRecord) -> Result<Record, StoreError> {
        self.bounded(
            sqlx::query_as::<_, Record>("INSERT INTO tests (test) VALUES ($1) RETURNING id, test")
                .bind(&new.test)
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        self.bounded(sqlx::query_as::<_, Record>("SELECT id, test FROM tests").fetch_all(&self.pool))
            .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Record, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, Record>("SELECT id, test FROM tests WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;
        row.ok_or(StoreError::NotFound { id })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.bounded(sqlx::query("DELETE FROM tests WHERE id = $1").bind(id).execute(&self.pool))
            .await?;
        Ok(())
    }

    async fn raw_query(&self) -> Result<Vec<Record>, StoreError> {
        let sql = self.queries.get(LIST_RECORDS_RAW)?;
        let rows = self.bounded(sqlx::query(sql).fetch_all(&self.pool)).await?;
        rows.iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::from)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(&self.pool)).await?;
        Ok(())
    }
}

fn row_to_record(row: &PgRow) -> Result<Record, sqlx::Error> {
    Ok(Record {
        id: row.try_get("id")?,
        test: row.try_get("test")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stalled_call_times_out() {
        let limit = Duration::from_millis(20);
        let stalled = std::future::pending::<Result<(), sqlx::Error>>();
        match with_deadline(limit, stalled).await {
            Err(StoreError::Timeout(d)) => assert_eq!(d, limit),
            other => panic!("expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn prompt_call_passes_through() {
        let limit = Duration::from_secs(5);
        assert_eq!(with_deadline(limit, async { Ok::<_, sqlx::Error>(7) }).await.unwrap(), 7);
        assert!(matches!(
            with_deadline(limit, async { Err::<(), _>(sqlx::Error::RowNotFound) }).await,
            Err(StoreError::Db(sqlx::Error::RowNotFound))
        ));
    }
}
