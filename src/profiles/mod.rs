mod me;
mod page;

use axum::{Router, routing::get};

use crate::AppState;

pub use me::{MAX_BIO_CHARS, UpdateProfileRequest, update_profile};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(me::profile).put(me::update))
        .route("/{username}", get(page::page))
}
