use axum::{extract::FromRequestParts, http::{HeaderMap, header, request::Parts}};
use rand::{Rng, distr::Alphanumeric};
use serde::Serialize;
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};

use crate::{AppError, AppResult, AppState};

pub const TOKEN_TTL: Duration = Duration::days(30);

const TOKEN_CHARS: usize = 40;

#[derive(Serialize)]
pub(crate) struct CredentialResponse {
    pub(crate) token: String,
    pub(crate) username: String,
}

pub async fn issue_token(db_pool: &SqlitePool, user_id: &str) -> AppResult<String> {
    let token: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_CHARS)
        .map(char::from)
        .collect();

    sqlx::query("INSERT INTO sessions (token,user_id,expires_at) VALUES (?,?,?)")
        .bind(&token)
        .bind(user_id)
        .bind(OffsetDateTime::now_utc() + TOKEN_TTL)
        .execute(db_pool)
        .await?;

    Ok(token)
}

pub async fn revoke_token(db_pool: &SqlitePool, token: &str) -> AppResult<()> {
    sqlx::query("DELETE FROM sessions WHERE token=?")
        .bind(token)
        .execute(db_pool)
        .await?;

    Ok(())
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer ").or_else(|| value.strip_prefix("bearer ")))
}

pub struct AuthUser {
    pub id: String,
    pub username: String,
}

pub async fn authenticate(db_pool: &SqlitePool, token: &str) -> AppResult<AuthUser> {
    let Some((user_id, username, expires_at)): Option<(String, String, OffsetDateTime)> =
        sqlx::query_as(
            "SELECT s.user_id, u.username, s.expires_at
             FROM sessions s JOIN users u ON u.id = s.user_id
             WHERE s.token=?",
        )
        .bind(token)
        .fetch_optional(db_pool)
        .await?
    else {
        return Err(AppError::Unauthorized);
    };

    if expires_at <= OffsetDateTime::now_utc() {
        sqlx::query("DELETE FROM sessions WHERE token=?")
            .bind(token)
            .execute(db_pool)
            .await?;
        return Err(AppError::Unauthorized);
    }

    Ok(AuthUser { id: user_id, username })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        authenticate(&state.db_pool, token).await
    }
}
