//! Store-free endpoints: ping and the add-one demo.

use crate::error::{AppError, ClientInputError};
use crate::handlers::records::parse_id;
use axum::{extract::Path, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Pong {
    message: &'static str,
}

pub async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}

pub async fn add_one(Path(id_str): Path<String>) -> Result<Json<i64>, AppError> {
    let id = parse_id(&id_str)?;
    let next = id
        .checked_add(1)
        .ok_or_else(|| ClientInputError::InvalidId(id_str))?;
    Ok(Json(next))
}
