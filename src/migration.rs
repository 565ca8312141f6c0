//! Schema ensure for the record table. Idempotent: CREATE ... IF NOT EXISTS only.

use crate::error::StoreError;
use sqlx::PgPool;

pub const RECORD_TABLE: &str = "tests";
/// Upper bound on `test` length, enforced by the column type and by request decoding.
pub const MAX_VALUE_LEN: usize = 100;

/// Create the record table if absent. Never drops or alters existing data.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            test VARCHAR({}) NOT NULL
        )
        "#,
        RECORD_TABLE, MAX_VALUE_LEN
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
