//! Connection manager: store-kind dispatch, pool construction from config, liveness probe.

use crate::config::{AppConfig, PostgresConfig, QueryLogLevel};
use crate::error::ConnectionError;
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// Selects the store kind.
pub const STORE_KIND_ENV: &str = "DB_TYPE";

const SLOW_STATEMENT: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
}

impl FromStr for StoreKind {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "postgres" => Ok(StoreKind::Postgres),
            other => Err(ConnectionError::UnsupportedKind(other.to_string())),
        }
    }
}

impl StoreKind {
    /// Read `DB_TYPE`. Unset is unsupported, like any other unknown value.
    pub fn from_env() -> Result<Self, ConnectionError> {
        std::env::var(STORE_KIND_ENV).unwrap_or_default().parse()
    }
}

/// Open the pool for the kind selected by `DB_TYPE`.
pub async fn connect(config: &AppConfig) -> Result<PgPool, ConnectionError> {
    open(StoreKind::from_env()?, config).await
}

pub async fn open(kind: StoreKind, config: &AppConfig) -> Result<PgPool, ConnectionError> {
    match kind {
        StoreKind::Postgres => connect_postgres(config).await,
    }
}

/// Open a lazily-connecting pool with the configured limits, then ping it once.
/// A failed ping closes the pool before returning.
async fn connect_postgres(config: &AppConfig) -> Result<PgPool, ConnectionError> {
    let options = connect_options(&config.postgres, config.app.query_log_level)?;
    let pool = pool_options(&config.postgres).connect_lazy_with(options);

    if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
        pool.close().await;
        return Err(ConnectionError::Unreachable(e));
    }
    Ok(pool)
}

pub fn connect_options(
    pg: &PostgresConfig,
    log_level: Option<QueryLogLevel>,
) -> Result<PgConnectOptions, ConnectionError> {
    let ssl_mode = PgSslMode::from_str(&pg.sslmode).map_err(ConnectionError::InvalidOption)?;
    let options = PgConnectOptions::new()
        .host(&pg.host)
        .port(pg.port)
        .username(&pg.user)
        .password(&pg.password)
        .database(&pg.dbname)
        .ssl_mode(ssl_mode);
    Ok(apply_statement_logging(options, log_level))
}

fn apply_statement_logging(options: PgConnectOptions, level: Option<QueryLogLevel>) -> PgConnectOptions {
    match level {
        None => options,
        Some(QueryLogLevel::Silent) => options.disable_statement_logging(),
        Some(QueryLogLevel::Error) => options
            .log_statements(LevelFilter::Off)
            .log_slow_statements(LevelFilter::Off, SLOW_STATEMENT),
        Some(QueryLogLevel::Warn) => options
            .log_statements(LevelFilter::Off)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT),
        Some(QueryLogLevel::Info) => options
            .log_statements(LevelFilter::Info)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT),
    }
}

/// Pool limits, all from config. Idle connections beyond `max_idle_conns` are reaped after
/// `conn_max_idle_time`; the pool never reaps below that floor.
pub fn pool_options(pg: &PostgresConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(pg.max_open_conns)
        .min_connections(pg.max_idle_conns.min(pg.max_open_conns))
        .max_lifetime(pg.conn_max_lifetime())
        .idle_timeout(pg.conn_max_idle_time())
        .acquire_timeout(pg.acquire_timeout())
}
