//! The single persisted entity.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub test: String,
}

/// Create payload. The id is always store-assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub test: String,
}

impl NewRecord {
    pub fn new(test: impl Into<String>) -> Self {
        NewRecord { test: test.into() }
    }

    pub fn with_id(self, id: i64) -> Record {
        Record { id, test: self.test }
    }
}
