use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::AppResult;

use super::session::{self, CredentialResponse};

#[derive(Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
}

#[debug_handler]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    Json(RegisterRequest { username }): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<CredentialResponse>)> {
    let user = super::create_user(&db_pool, &username).await?;
    let token = session::issue_token(&db_pool, &user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CredentialResponse { token, username: user.username }),
    ))
}
