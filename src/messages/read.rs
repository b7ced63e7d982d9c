use axum::{Json, debug_handler, extract::{Path, State}};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarkReadRequest {
    pub(crate) message_ids: Vec<String>,
}

#[derive(Serialize)]
pub(crate) struct MarkReadResponse {
    pub(crate) success: bool,
    pub(crate) updated: u64,
}

// Each update is scoped to the caller, so ids the caller doesn't own (or that
// don't exist, or are already read) are skipped rather than failing the batch.
pub async fn mark_read(db_pool: &SqlitePool, recipient_id: &str, message_ids: &[String]) -> AppResult<u64> {
    let mut updated = 0;

    for message_id in message_ids {
        updated += sqlx::query(
            "UPDATE messages SET is_read=1 WHERE id=? AND recipient_id=? AND is_read=0",
        )
        .bind(message_id)
        .bind(recipient_id)
        .execute(db_pool)
        .await?
        .rows_affected();
    }

    Ok(updated)
}

#[debug_handler(state = AppState)]
pub(crate) async fn mark_read_batch(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(MarkReadRequest { message_ids }): Json<MarkReadRequest>,
) -> AppResult<Json<MarkReadResponse>> {
    let updated = mark_read(&db_pool, &user.id, &message_ids).await?;

    Ok(Json(MarkReadResponse { success: true, updated }))
}

// Unlike the batch path, addressing one foreign message by id is an
// authorization failure, not a silent skip.
pub async fn mark_one_read(db_pool: &SqlitePool, caller_id: &str, message_id: &Uuid) -> AppResult<()> {
    let Some((recipient_id,)): Option<(String,)> =
        sqlx::query_as("SELECT recipient_id FROM messages WHERE id=?")
            .bind(message_id.to_string())
            .fetch_optional(db_pool)
            .await?
    else {
        return Err(AppError::NotFound("Message not found".to_owned()));
    };

    if recipient_id != caller_id {
        return Err(AppError::Forbidden("Not authorized".to_owned()));
    }

    sqlx::query("UPDATE messages SET is_read=1 WHERE id=?")
        .bind(message_id.to_string())
        .execute(db_pool)
        .await?;

    Ok(())
}

#[derive(Serialize)]
pub(crate) struct MarkOneResponse {
    pub(crate) message: &'static str,
}

#[debug_handler(state = AppState)]
pub(crate) async fn mark_one(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(message_id): Path<Uuid>,
) -> AppResult<Json<MarkOneResponse>> {
    mark_one_read(&db_pool, &user.id, &message_id).await?;

    Ok(Json(MarkOneResponse { message: "Message marked as read" }))
}
