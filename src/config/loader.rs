//! Resolve the profile from `ENV` and load `config/config-{profile}.yaml`.

use crate::config::types::AppConfig;
use crate::config::validate;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Selects the config profile.
pub const PROFILE_ENV: &str = "ENV";
/// Receives the resolved run mode for the HTTP layer.
pub const RUN_MODE_ENV: &str = "GIN_MODE";
pub const DEFAULT_PROFILE: &str = "dev";
pub const CONFIG_DIR: &str = "config";

/// Profile name from a raw `ENV` value. Absent or blank selects `dev`.
pub fn profile_name(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => DEFAULT_PROFILE.to_string(),
    }
}

pub fn config_path(dir: &Path, profile: &str) -> PathBuf {
    dir.join(format!("config-{}.yaml", profile))
}

/// A loaded profile together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub profile: String,
    pub path: PathBuf,
    pub config: AppConfig,
}

/// Load the profile selected by `ENV` from `./config` and publish its mode into `GIN_MODE`.
pub fn load() -> Result<LoadedConfig, ConfigError> {
    let raw = std::env::var(PROFILE_ENV).ok();
    let profile = profile_name(raw.as_deref());
    let dir = Path::new(CONFIG_DIR);
    let config = load_from(dir, &profile)?;
    publish_mode(&config);
    Ok(LoadedConfig {
        path: config_path(dir, &profile),
        profile,
        config,
    })
}

/// Load and validate `config-{profile}.yaml` under `dir`. No side effects.
pub fn load_from(dir: &Path, profile: &str) -> Result<AppConfig, ConfigError> {
    let path = config_path(dir, profile);
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound { path });
        }
        Err(e) => {
            return Err(ConfigError::Invalid {
                path,
                reason: e.to_string(),
            });
        }
    };
    let config = parse(&text, &path)?;
    validate(&config, &path)?;
    Ok(config)
}

/// Decode a document. `path` is only used for error context.
pub fn parse(text: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    serde_yaml::from_str(text).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Propagation step: the run-mode switch of the HTTP layer reads `GIN_MODE`.
pub fn publish_mode(config: &AppConfig) {
    std::env::set_var(RUN_MODE_ENV, config.app.mode.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{QueryLogLevel, RunMode};

    const FULL: &str = r#"
app:
  mode: release
  gorm_log_level: warn
  addr: "127.0.0.1:9000"
postgres:
  host: db.internal
  port: 5433
  user: svc
  password: hunter2
  dbname: records
  sslmode: require
  max_open_conns: 20
  max_idle_conns: 4
  conn_max_lifetime: 600
  conn_max_idle_time: 60
"#;

    #[test]
    fn blank_profile_falls_back_to_dev() {
        assert_eq!(profile_name(None), "dev");
        assert_eq!(profile_name(Some("")), "dev");
        assert_eq!(profile_name(Some("  ")), "dev");
        assert_eq!(profile_name(Some("prod")), "prod");
    }

    #[test]
    fn path_is_templated_on_profile() {
        let p = config_path(Path::new("config"), "prod");
        assert_eq!(p, PathBuf::from("config/config-prod.yaml"));
    }

    #[test]
    fn parses_full_document() {
        let cfg = parse(FULL, Path::new("x.yaml")).unwrap();
        assert_eq!(cfg.app.mode, RunMode::Release);
        assert_eq!(cfg.app.query_log_level, Some(QueryLogLevel::Warn));
        assert_eq!(cfg.app.addr, "127.0.0.1:9000");
        assert_eq!(cfg.postgres.port, 5433);
        assert_eq!(cfg.postgres.max_open_conns, 20);
        assert_eq!(cfg.postgres.max_idle_conns, 4);
        assert_eq!(cfg.postgres.conn_max_lifetime().as_secs(), 600);
        assert_eq!(cfg.postgres.conn_max_idle_time().as_secs(), 60);
    }

    #[test]
    fn pool_limits_default_when_omitted() {
        let doc = r#"
app:
  mode: dev
postgres:
  host: localhost
  port: 5432
  user: postgres
  password: postgres
  dbname: app
"#;
        let cfg = parse(doc, Path::new("x.yaml")).unwrap();
        assert_eq!(cfg.app.mode, RunMode::Debug);
        assert_eq!(cfg.app.query_log_level, None);
        assert_eq!(cfg.postgres.sslmode, "prefer");
        assert_eq!(cfg.postgres.max_open_conns, 10);
        assert_eq!(cfg.postgres.max_idle_conns, 5);
        assert_eq!(cfg.postgres.conn_max_lifetime, 300);
        assert_eq!(cfg.postgres.conn_max_idle_time, 120);
    }

    #[test]
    fn missing_required_field_is_decode_failure() {
        let doc = "app:\n  mode: dev\npostgres:\n  host: localhost\n";
        let err = parse(doc, Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn password_is_not_debug_printed() {
        let cfg = parse(FULL, Path::new("x.yaml")).unwrap();
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("hunter2"));
    }
}
