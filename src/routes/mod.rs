//! Router assembly and the middleware stack.

mod common;
mod records;

pub use common::common_routes;
pub use records::{record_routes, v1_routes};

use crate::middleware::request_logger;
use crate::state::AppState;
use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Every route, wrapped (outermost first) in the request logger, the body limit and the
/// request timeout. The timeout sits innermost: its 408 needs a `Default` response body.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(v1_routes())
        .merge(record_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_logger))
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
