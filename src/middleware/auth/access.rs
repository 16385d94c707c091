//! `?access_token=` → token service lookup → identity on the request.
//!
//! - Anonymous requests (no token, unknown token) pass through untouched,
//!   minus any identity headers the client tried to send.
//! - Token service / integration failures abort the request with the
//!   classified status and message.
//! - Whether a route requires an identity is up to the handler
//!   (see `RequireCaller`).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Apply the access middleware to every route of `router`.
///
/// Ex:
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    state
        .authenticator
        .authenticate_request(Some(&mut req))
        .await?;

    Ok(next.run(req).await)
}
