use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{AppError, AppResult};

pub const MAX_CONTENT_CHARS: usize = 500;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub recipient: String,
    pub content: String,
    #[serde(default)]
    pub card_template: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct SendMessageResponse {
    pub(crate) message: &'static str,
    pub(crate) id: String,
}

// Anyone holding the share link may send; there is deliberately no rate
// limiting, duplicate detection or content filtering, and no sender identity
// is ever recorded.
#[debug_handler]
pub(crate) async fn send(
    State(db_pool): State<SqlitePool>,
    Json(request): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<SendMessageResponse>)> {
    let id = send_message(&db_pool, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse { message: "Message sent successfully", id }),
    ))
}

pub async fn send_message(db_pool: &SqlitePool, request: SendMessageRequest) -> AppResult<String> {
    if request.recipient.is_empty() || request.content.is_empty() {
        return Err(AppError::Validation(
            "Recipient and content are required".to_owned(),
        ));
    }
    if request.content.chars().count() > MAX_CONTENT_CHARS {
        return Err(AppError::Validation(format!(
            "Message is too long (max {MAX_CONTENT_CHARS} characters)"
        )));
    }

    let Some((recipient_id, preferred_template)): Option<(String, String)> =
        sqlx::query_as("SELECT id,preferred_card_template FROM users WHERE username=?")
            .bind(&request.recipient)
            .fetch_optional(db_pool)
            .await?
    else {
        return Err(AppError::NotFound("Recipient not found".to_owned()));
    };

    // bound once at creation: sender choice, else recipient preference, else
    // "default"; empty strings count as absent
    let card_template = request
        .card_template
        .filter(|template| !template.is_empty())
        .unwrap_or_else(|| {
            if preferred_template.is_empty() {
                "default".to_owned()
            } else {
                preferred_template
            }
        });

    let id = Uuid::now_v7().to_string();
    let now = OffsetDateTime::now_utc();
    sqlx::query(
        "INSERT INTO messages (id,recipient_id,content,card_template,is_read,created_at)
         VALUES (?,?,?,?,0,?)",
    )
    .bind(&id)
    .bind(&recipient_id)
    .bind(&request.content)
    .bind(&card_template)
    .bind(now)
    .execute(db_pool)
    .await?;

    // advisory activity marker; the send already succeeded
    if let Err(err) = sqlx::query("UPDATE users SET last_seen=? WHERE id=?")
        .bind(now)
        .bind(&recipient_id)
        .execute(db_pool)
        .await
    {
        tracing::warn!("couldn't update last_seen for {recipient_id}: {err}");
    }

    tracing::info!("new message for @{}", request.recipient);

    Ok(id)
}
