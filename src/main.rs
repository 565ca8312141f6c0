use record_service::config;
use record_service::{bootstrap, telemetry};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Loading publishes GIN_MODE, which picks the log verbosity below.
    let loaded = config::load();
    telemetry::init_tracing();

    let loaded = match loaded {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        profile = %loaded.profile,
        path = %loaded.path.display(),
        mode = loaded.config.app.mode.as_str(),
        "loaded config"
    );

    let app = match bootstrap(loaded.config).await {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = app.serve().await {
        tracing::error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
