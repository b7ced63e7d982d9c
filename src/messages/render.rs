use axum::{Json, debug_handler, extract::{Path, Query, State}};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, auth::AuthUser, cards, cards::RenderTarget, db::Message};

#[derive(Deserialize)]
pub(crate) struct RenderQuery {
    #[serde(default)]
    pub(crate) public: bool,
}

// Hands the export pipeline a style-complete bundle; the rasterization
// itself happens outside this service.
#[debug_handler(state = AppState)]
pub(crate) async fn render_card(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(message_id): Path<Uuid>,
    Query(RenderQuery { public }): Query<RenderQuery>,
) -> AppResult<Json<RenderTarget>> {
    let Some(message): Option<Message> =
        sqlx::query_as("SELECT * FROM messages WHERE id=? AND recipient_id=?")
            .bind(message_id.to_string())
            .bind(&user.id)
            .fetch_optional(&db_pool)
            .await?
    else {
        return Err(AppError::NotFound("Message not found".to_owned()));
    };

    Ok(Json(cards::render_target(
        &message.content,
        &message.card_template,
        public,
    )))
}
