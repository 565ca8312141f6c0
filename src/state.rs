//! Shared application state for all routes.

use crate::repository::RecordRepository;
use crate::service::{RecordService, Records};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordService>,
}

impl AppState {
    pub fn new(records: Arc<dyn RecordService>) -> Self {
        AppState { records }
    }

    /// State wired through the default pass-through service.
    pub fn from_repository(repo: Arc<dyn RecordRepository>) -> Self {
        Self::new(Arc::new(Records::new(repo)))
    }
}
