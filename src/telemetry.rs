//! Structured logging. Verbosity follows the run mode published in `GIN_MODE`; `RUST_LOG` overrides.

use crate::config::{RunMode, RUN_MODE_ENV};
use tracing_subscriber::EnvFilter;

/// Run mode as seen by the HTTP layer. Unset or unknown means debug.
pub fn run_mode() -> RunMode {
    std::env::var(RUN_MODE_ENV)
        .ok()
        .and_then(|m| m.parse().ok())
        .unwrap_or(RunMode::Debug)
}

pub fn default_filter(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Debug => "record_service=debug,tower_http=debug,sqlx=info",
        RunMode::Release => "record_service=info,sqlx=warn",
        RunMode::Test => "record_service=warn",
    }
}

pub fn init_tracing() {
    let mode = run_mode();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(mode))),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_quieter_than_debug() {
        assert!(default_filter(RunMode::Debug).contains("record_service=debug"));
        assert!(default_filter(RunMode::Release).contains("record_service=info"));
        assert!(!default_filter(RunMode::Test).contains("debug"));
    }
}
