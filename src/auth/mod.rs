mod login;
mod logout;
mod register;
mod session;

use axum::{routing::post, Router};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState, db::User};

pub use session::{AuthUser, TOKEN_TTL, authenticate, issue_token, revoke_token};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout))
}

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 20;

pub async fn create_user(db_pool: &SqlitePool, username: &str) -> AppResult<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_owned()));
    }

    let chars = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&chars) {
        return Err(AppError::Validation(format!(
            "Username must be {USERNAME_MIN_CHARS}-{USERNAME_MAX_CHARS} characters"
        )));
    }

    if sqlx::query("SELECT 1 FROM users WHERE username=?")
        .bind(username)
        .fetch_optional(db_pool)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username is already taken".to_owned()));
    }

    let now = OffsetDateTime::now_utc();
    let user = User {
        id: Uuid::now_v7().to_string(),
        username: username.to_owned(),
        profile_picture: String::new(),
        bio: String::new(),
        preferred_card_template: "default".to_owned(),
        allow_notifications: true,
        last_seen: now,
        created_at: now,
    };

    sqlx::query(
        "INSERT INTO users (id,username,profile_picture,bio,preferred_card_template,allow_notifications,last_seen,created_at)
         VALUES (?,?,?,?,?,?,?,?)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.profile_picture)
    .bind(&user.bio)
    .bind(&user.preferred_card_template)
    .bind(user.allow_notifications)
    .bind(user.last_seen)
    .bind(user.created_at)
    .execute(db_pool)
    .await
    .map_err(|err| match &err {
        // the UNIQUE constraint catches a register racing the SELECT above
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Username is already taken".to_owned())
        }
        _ => AppError::from(err),
    })?;

    tracing::info!("registered @{}", user.username);

    Ok(user)
}
