//! record-service: config-driven PostgreSQL pool, record repository, service seam and HTTP pipeline.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use bootstrap::{bootstrap, Application};
pub use config::{load, load_from, AppConfig, LoadedConfig, RunMode};
pub use error::{AppError, BootstrapError, ClientInputError, ConfigError, ConnectionError, StoreError};
pub use migration::migrate;
pub use model::{NewRecord, Record};
pub use repository::{InMemoryRecordRepository, PgRecordRepository, RecordRepository};
pub use routes::app;
pub use service::{RecordService, Records};
pub use state::AppState;
pub use store::{connect, open, StoreKind};
