//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("config decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config invalid {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("unsupported DB_TYPE: '{0}'")]
    UnsupportedKind(String),
    #[error("invalid connection option: {0}")]
    InvalidOption(#[source] sqlx::Error),
    #[error("database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record {id} not found")]
    NotFound { id: i64 },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store call exceeded {0:?}")]
    Timeout(Duration),
    #[error("unknown named query: {0}")]
    UnknownQuery(String),
    #[error("query file {}: {source}", .path.display())]
    QueryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientInputError {
    #[error("malformed body: {0}")]
    MalformedBody(String),
    #[error("invalid id: '{0}'")]
    InvalidId(String),
    #[error("body too large: {0}")]
    TooLarge(String),
}

/// Startup failures. All of them are fatal; the binary decides how to exit.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("named queries: {0}")]
    Queries(#[source] StoreError),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error("schema ensure: {0}")]
    Schema(#[source] StoreError),
    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] ClientInputError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => AppError::NotFound(format!("record {}", id)),
            other => AppError::Store(other),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Input(ClientInputError::TooLarge(_)) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
            }
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Store(StoreError::Timeout(_)) => (StatusCode::GATEWAY_TIMEOUT, "store_timeout"),
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };
        // Store failures stay in the log; clients only see the category.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            status.canonical_reason().unwrap_or("server error").to_lowercase()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_becomes_http_not_found() {
        let err: AppError = StoreError::NotFound { id: 7 }.into();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_are_server_errors() {
        let err: AppError = StoreError::Db(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: AppError = StoreError::Timeout(Duration::from_secs(1)).into();
        assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn oversized_body_is_payload_too_large() {
        let err: AppError = ClientInputError::TooLarge("length limit exceeded".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn client_input_is_bad_request() {
        let err: AppError = ClientInputError::InvalidId("abc".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
