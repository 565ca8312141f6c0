//! Startup sequence: query catalogue → connect → schema ensure → pipeline registration, then serve.
//! Every step returns a `Result`; only the binary decides to exit.

use crate::config::AppConfig;
use crate::error::BootstrapError;
use crate::migration::migrate;
use crate::repository::PgRecordRepository;
use crate::routes;
use crate::sql::{NamedQueries, LIST_RECORDS_RAW, RECORD_QUERY_FILE};
use crate::state::AppState;
use crate::store;
use axum::Router;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// A started application: config, live pool and the assembled router. No request has been
/// accepted yet.
pub struct Application {
    config: AppConfig,
    pool: PgPool,
    router: Router,
}

/// Read the record statements and check the raw listing is present.
pub async fn load_queries(path: &Path) -> Result<NamedQueries, BootstrapError> {
    let queries = NamedQueries::load(path).await.map_err(BootstrapError::Queries)?;
    queries.get(LIST_RECORDS_RAW).map_err(BootstrapError::Queries)?;
    info!(path = %path.display(), count = queries.len(), "loaded named queries");
    Ok(queries)
}

pub async fn bootstrap(config: AppConfig) -> Result<Application, BootstrapError> {
    let queries = load_queries(Path::new(RECORD_QUERY_FILE)).await?;
    let pool = store::connect(&config).await?;
    info!(
        host = %config.postgres.host,
        dbname = %config.postgres.dbname,
        max_open = config.postgres.max_open_conns,
        max_idle = config.postgres.max_idle_conns,
        "connected to PostgreSQL"
    );

    if let Err(e) = migrate(&pool).await {
        pool.close().await;
        return Err(BootstrapError::Schema(e));
    }
    info!("schema ensured");

    let repo = PgRecordRepository::new(
        pool.clone(),
        config.postgres.statement_timeout(),
        Arc::new(queries),
    );
    let state = AppState::from_repository(Arc::new(repo));
    let router = routes::app(state, config.app.request_timeout());

    Ok(Application { config, pool, router })
}

impl Application {
    /// Bind and serve until Ctrl+C / SIGTERM, then close the pool.
    pub async fn serve(self) -> Result<(), BootstrapError> {
        let addr = self.config.app.addr.clone();
        let listener = match TcpListener::bind(&addr).await {
            Ok(l) => l,
            Err(source) => {
                self.pool.close().await;
                return Err(BootstrapError::Bind { addr, source });
            }
        };
        if let Ok(local) = listener.local_addr() {
            info!(mode = self.config.app.mode.as_str(), "listening on {}", local);
        }

        let served = axum::serve(
            listener,
            self.router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await;

        self.pool.close().await;
        info!("shutdown complete");
        served.map_err(BootstrapError::Serve)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("received Ctrl+C, shutting down"),
        _ = terminate => warn!("received SIGTERM, shutting down"),
    }
}
