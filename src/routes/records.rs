//! Record routes under /api/test, plus the v1 ping.
//! Static segments (ping, add, raw) take precedence over `:id`.

use crate::handlers::demo::{add_one, ping};
use crate::handlers::records::{create, delete as delete_handler, list, raw, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/test/ping", get(ping))
        .route("/api/test", get(list).post(create))
        .route("/api/test/", get(list).post(create))
        .route("/api/test/raw", get(raw))
        .route("/api/test/add/:id", get(add_one))
        .route("/api/test/:id", get(read).delete(delete_handler))
        .with_state(state)
}

pub fn v1_routes() -> Router {
    Router::new().route("/api/v1/ping", get(ping))
}
