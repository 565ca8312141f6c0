//! Raw config types matching the YAML document (`config/config-{profile}.yaml`).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP run mode. Published as `GIN_MODE` once the config is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[serde(alias = "dev")]
    Debug,
    #[serde(alias = "prod")]
    Release,
    Test,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Release => "release",
            RunMode::Test => "test",
        }
    }
}

impl std::str::FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "dev" => Ok(RunMode::Debug),
            "release" | "prod" => Ok(RunMode::Release),
            "test" => Ok(RunMode::Test),
            other => Err(format!("unknown run mode: {}", other)),
        }
    }
}

/// Verbosity of statement logging from the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLogLevel {
    Silent,
    Error,
    Warn,
    Info,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSection {
    pub mode: RunMode,
    #[serde(default, rename = "gorm_log_level")]
    pub query_log_level: Option<QueryLogLevel>,
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl AppSection {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// PostgreSQL credentials and pool limits. Durations are seconds.
#[derive(Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
    #[serde(default = "default_max_open")]
    pub max_open_conns: u32,
    #[serde(default = "default_max_idle")]
    pub max_idle_conns: u32,
    #[serde(default = "default_max_lifetime")]
    pub conn_max_lifetime: u64,
    #[serde(default = "default_max_idle_time")]
    pub conn_max_idle_time: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
    #[serde(default = "default_statement_timeout")]
    pub statement_timeout: u64,
}

impl PostgresConfig {
    pub fn conn_max_lifetime(&self) -> Duration {
        Duration::from_secs(self.conn_max_lifetime)
    }

    pub fn conn_max_idle_time(&self) -> Duration {
        Duration::from_secs(self.conn_max_idle_time)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }

    pub fn statement_timeout(&self) -> Duration {
        Duration::from_secs(self.statement_timeout)
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .field("max_open_conns", &self.max_open_conns)
            .field("max_idle_conns", &self.max_idle_conns)
            .field("conn_max_lifetime", &self.conn_max_lifetime)
            .field("conn_max_idle_time", &self.conn_max_idle_time)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("statement_timeout", &self.statement_timeout)
            .finish()
    }
}

/// Whole document. Immutable once loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub postgres: PostgresConfig,
}

fn default_addr() -> String {
    "0.0.0.0:8080".into()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_sslmode() -> String {
    "prefer".into()
}

fn default_max_open() -> u32 {
    10
}

fn default_max_idle() -> u32 {
    5
}

fn default_max_lifetime() -> u64 {
    300
}

fn default_max_idle_time() -> u64 {
    120
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_statement_timeout() -> u64 {
    10
}
