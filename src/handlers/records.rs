//! Create and list handlers, generic over the entity. Each request opens one
//! connection, runs one statement and closes the connection.

use crate::entity::Entity;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response::{Acknowledgment, Listing};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{extract::State, Json};
use sqlx::{Connection, PgConnection};

/// Close the request's connection whatever the statement returned. A statement
/// error wins over a close error.
async fn finish<T>(conn: PgConnection, result: Result<T, AppError>) -> Result<T, AppError> {
    let closed = conn.close().await;
    let value = result?;
    closed?;
    Ok(value)
}

/// POST /<entity>/ — insert the payload as one row.
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<E::New>,
) -> Result<Json<Acknowledgment>, AppError> {
    let mut conn = state.connect().await?;
    let inserted = RecordService::create::<E>(&mut conn, new).await;
    finish(conn, inserted).await?;
    Ok(Json(Acknowledgment {
        message: E::created_message(),
    }))
}

/// GET /<entity>/ — every row under the entity's list key.
pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Listing<E>>, AppError> {
    let mut conn = state.connect().await?;
    let fetched = RecordService::list::<E>(&mut conn).await;
    let rows = finish(conn, fetched).await?;
    Ok(Json(Listing {
        key: E::LIST_KEY,
        rows,
    }))
}
