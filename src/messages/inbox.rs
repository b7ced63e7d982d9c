use axum::{Json, debug_handler, extract::State};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{AppResult, AppState, auth::AuthUser, db::Message};

pub async fn fetch_inbox(db_pool: &SqlitePool, recipient_id: &str) -> AppResult<Vec<Message>> {
    // newest first is part of the contract, not a presentation choice
    let messages = sqlx::query_as(
        "SELECT * FROM messages WHERE recipient_id=? ORDER BY created_at DESC",
    )
    .bind(recipient_id)
    .fetch_all(db_pool)
    .await?;

    Ok(messages)
}

pub async fn unread_count(db_pool: &SqlitePool, recipient_id: &str) -> AppResult<i64> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM messages WHERE recipient_id=? AND is_read=0")
            .bind(recipient_id)
            .fetch_one(db_pool)
            .await?;

    Ok(count)
}

#[debug_handler(state = AppState)]
pub(crate) async fn inbox(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> AppResult<Json<Vec<Message>>> {
    Ok(Json(fetch_inbox(&db_pool, &user.id).await?))
}

#[derive(Serialize)]
pub(crate) struct UnreadResponse {
    pub(crate) count: i64,
}

#[debug_handler(state = AppState)]
pub(crate) async fn unread(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> AppResult<Json<UnreadResponse>> {
    let count = unread_count(&db_pool, &user.id).await?;

    Ok(Json(UnreadResponse { count }))
}
