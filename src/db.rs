use serde::Serialize;
use sqlx::SqlitePool;
use time::OffsetDateTime;

pub async fn init_schema(db_pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            profile_picture TEXT NOT NULL DEFAULT '',
            bio TEXT NOT NULL DEFAULT '',
            preferred_card_template TEXT NOT NULL DEFAULT 'default',
            allow_notifications INTEGER NOT NULL DEFAULT 1,
            last_seen TIMESTAMP NOT NULL,
            created_at TIMESTAMP NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    // no sender column: messages are anonymous by construction
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            recipient_id TEXT NOT NULL REFERENCES users(id),
            content TEXT NOT NULL,
            card_template TEXT NOT NULL DEFAULT 'default',
            is_read INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_messages_recipient
            ON messages (recipient_id, created_at)",
    )
    .execute(db_pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id),
            expires_at TIMESTAMP NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    Ok(())
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub profile_picture: String,
    pub bio: String,
    pub preferred_card_template: String,
    pub allow_notifications: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub last_seen: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub recipient_id: String,
    pub content: String,
    pub card_template: String,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub async fn fetch_user(db_pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE id=?")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await
}
