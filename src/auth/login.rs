use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{AppError, AppResult};

use super::session::{self, CredentialResponse};

#[derive(Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
}

#[debug_handler]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    Json(LoginRequest { username }): Json<LoginRequest>,
) -> AppResult<Json<CredentialResponse>> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_owned()));
    }

    let Some((user_id, username)): Option<(String, String)> =
        sqlx::query_as("SELECT id,username FROM users WHERE username=?")
            .bind(username)
            .fetch_optional(&db_pool)
            .await?
    else {
        return Err(AppError::NotFound("User not found".to_owned()));
    };

    let token = session::issue_token(&db_pool, &user_id).await?;

    tracing::info!("welcome back @{username}");

    Ok(Json(CredentialResponse { token, username }))
}
