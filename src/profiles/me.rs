use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser, db, db::User};

pub const MAX_BIO_CHARS: usize = 160;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    // not checked against the card catalog: unknown ids degrade at render time
    pub preferred_card_template: Option<String>,
    pub allow_notifications: Option<bool>,
    pub profile_picture: Option<String>,
}

pub async fn update_profile(
    db_pool: &SqlitePool,
    user_id: &str,
    request: UpdateProfileRequest,
) -> AppResult<User> {
    if let Some(bio) = &request.bio {
        if bio.chars().count() > MAX_BIO_CHARS {
            return Err(AppError::Validation(format!(
                "Bio is too long (max {MAX_BIO_CHARS} characters)"
            )));
        }
    }

    sqlx::query(
        "UPDATE users SET
            bio = COALESCE(?, bio),
            preferred_card_template = COALESCE(?, preferred_card_template),
            allow_notifications = COALESCE(?, allow_notifications),
            profile_picture = COALESCE(?, profile_picture)
         WHERE id=?",
    )
    .bind(&request.bio)
    .bind(&request.preferred_card_template)
    .bind(request.allow_notifications)
    .bind(&request.profile_picture)
    .bind(user_id)
    .execute(db_pool)
    .await?;

    db::fetch_user(db_pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))
}

#[debug_handler(state = AppState)]
pub(crate) async fn profile(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> AppResult<Json<User>> {
    let user = db::fetch_user(&db_pool, &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

    Ok(Json(user))
}

#[debug_handler(state = AppState)]
pub(crate) async fn update(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<User>> {
    Ok(Json(update_profile(&db_pool, &user.id, request).await?))
}
