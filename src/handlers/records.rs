//! Record handlers: create, list, read, delete, raw listing.
//! Input is decoded and checked here; bad input never reaches the service.

use crate::error::{AppError, ClientInputError};
use crate::migration::MAX_VALUE_LEN;
use crate::model::NewRecord;
use crate::response::{created, deleted, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

pub(crate) fn parse_id(id_str: &str) -> Result<i64, ClientInputError> {
    id_str
        .parse()
        .map_err(|_| ClientInputError::InvalidId(id_str.to_string()))
}

fn decode_new(body: Result<Json<NewRecord>, JsonRejection>) -> Result<NewRecord, ClientInputError> {
    let Json(new) = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ClientInputError::TooLarge(e.body_text())
        } else {
            ClientInputError::MalformedBody(e.body_text())
        }
    })?;
    if new.test.chars().count() > MAX_VALUE_LEN {
        return Err(ClientInputError::MalformedBody(format!(
            "test must be at most {} characters",
            MAX_VALUE_LEN
        )));
    }
    Ok(new)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewRecord>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = decode_new(body)?;
    let record = state.records.create_record(new).await?;
    Ok(created(record))
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.records.list_records().await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let record = state.records.get_record(id).await?;
    Ok(ok(record))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.records.delete_record(id).await?;
    Ok(deleted(id))
}

pub async fn raw(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.records.raw_records().await?;
    Ok(ok(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("12"), Ok(12));
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_id("abc"), Err(ClientInputError::InvalidId("abc".into())));
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn value_length_is_bounded() {
        let fits = NewRecord::new("a".repeat(MAX_VALUE_LEN));
        assert!(decode_new(Ok(Json(fits))).is_ok());

        let long = NewRecord::new("a".repeat(MAX_VALUE_LEN + 1));
        assert!(matches!(
            decode_new(Ok(Json(long))),
            Err(ClientInputError::MalformedBody(_))
        ));
    }
}
