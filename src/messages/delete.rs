use axum::{Json, debug_handler, extract::{Path, State}};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

#[derive(Serialize)]
pub(crate) struct DeleteResponse {
    pub(crate) success: bool,
    pub(crate) message: &'static str,
}

// Hard delete, no tombstone. The recipient scope means a foreign or unknown
// id both come back as NotFound.
pub async fn delete_message(db_pool: &SqlitePool, recipient_id: &str, message_id: &Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM messages WHERE id=? AND recipient_id=?")
        .bind(message_id.to_string())
        .bind(recipient_id)
        .execute(db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Message not found".to_owned()));
    }

    Ok(())
}

#[debug_handler(state = AppState)]
pub(crate) async fn delete(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(message_id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    delete_message(&db_pool, &user.id, &message_id).await?;

    Ok(Json(DeleteResponse { success: true, message: "Message deleted successfully" }))
}
