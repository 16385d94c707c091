use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::oauth::{Identity, headers};

/// Handler-side view of the resolved identity.
///
/// - `Some(identity)`: the access middleware resolved a token for this request
/// - `None`: anonymous, but the request carries `x-public: true`
///
/// Anonymous, non-public requests are rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct RequireCaller(pub Option<Identity>);

impl<S> FromRequestParts<S> for RequireCaller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(Self(Some(*identity)));
        }

        if headers::is_public(Some(&parts.headers)) {
            return Ok(Self(None));
        }

        Err(AppError::Unauthorized)
    }
}
