//! Semantic checks the YAML decoder cannot express.

use crate::config::AppConfig;
use crate::error::ConfigError;
use sqlx::postgres::PgSslMode;
use std::path::Path;
use std::str::FromStr;

pub fn validate(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
    };
    let pg = &config.postgres;

    if pg.max_open_conns == 0 {
        return Err(invalid("postgres.max_open_conns must be at least 1".into()));
    }
    if pg.max_idle_conns > pg.max_open_conns {
        return Err(invalid(format!(
            "postgres.max_idle_conns ({}) exceeds max_open_conns ({})",
            pg.max_idle_conns, pg.max_open_conns
        )));
    }
    PgSslMode::from_str(&pg.sslmode)
        .map_err(|_| invalid(format!("postgres.sslmode '{}' is not a libpq ssl mode", pg.sslmode)))?;

    for (field, secs) in [
        ("conn_max_lifetime", pg.conn_max_lifetime),
        ("conn_max_idle_time", pg.conn_max_idle_time),
        ("acquire_timeout", pg.acquire_timeout),
        ("statement_timeout", pg.statement_timeout),
    ] {
        if secs == 0 {
            return Err(invalid(format!("postgres.{} must be positive", field)));
        }
    }
    if config.app.request_timeout_secs == 0 {
        return Err(invalid("app.request_timeout_secs must be positive".into()));
    }
    Ok(())
}
