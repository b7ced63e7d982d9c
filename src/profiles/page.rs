use axum::{Json, debug_handler, extract::{Path, State}};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{AppError, AppResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PublicProfile {
    pub(crate) username: String,
    pub(crate) bio: String,
    pub(crate) profile_picture: String,
    pub(crate) preferred_card_template: String,
}

// Public by design: anyone following a share link sees this much and no more.
#[debug_handler]
pub(crate) async fn page(
    Path(username): Path<String>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<PublicProfile>> {
    let Some((username, bio, profile_picture, preferred_card_template)): Option<(String, String, String, String)> =
        sqlx::query_as(
            "SELECT username,bio,profile_picture,preferred_card_template FROM users WHERE username=?",
        )
        .bind(&username)
        .fetch_optional(&db_pool)
        .await?
    else {
        return Err(AppError::NotFound("User not found".to_owned()));
    };

    Ok(Json(PublicProfile {
        username,
        bio,
        profile_picture,
        preferred_card_template,
    }))
}
