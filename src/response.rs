//! Success replies. Records and record lists go out bare; deletes get a confirmation.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of a successful delete.
#[derive(Serialize)]
pub struct Confirmation {
    pub id: i64,
    pub message: &'static str,
}

pub type Reply<T> = (StatusCode, Json<T>);

pub fn created<T: Serialize>(data: T) -> Reply<T> {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> Reply<T> {
    (StatusCode::OK, Json(data))
}

pub fn deleted(id: i64) -> Reply<Confirmation> {
    ok(Confirmation {
        id,
        message: "record deleted",
    })
}
