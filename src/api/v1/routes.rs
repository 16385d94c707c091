/*
 * Responsibility
 * - v1 URL layout
 * - The access middleware is applied to the whole v1 tree in app.rs
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::identity::{me, whoami};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/me", get(me))
}
