use axum::{Json, debug_handler, extract::State, http::HeaderMap};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{AppError, AppResult};

use super::session;

#[derive(Serialize)]
pub(crate) struct LogoutResponse {
    pub(crate) success: bool,
}

#[debug_handler]
pub(crate) async fn logout(
    State(db_pool): State<SqlitePool>,
    headers: HeaderMap,
) -> AppResult<Json<LogoutResponse>> {
    let token = session::bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    session::revoke_token(&db_pool, token).await?;

    Ok(Json(LogoutResponse { success: true }))
}
