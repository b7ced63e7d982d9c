pub mod appresult;
pub mod auth;
pub mod cards;
pub mod config;
pub mod db;
pub mod messages;
pub mod poll;
pub mod profiles;

use axum::extract::FromRef;
use sqlx::SqlitePool;

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}
