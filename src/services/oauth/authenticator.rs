//! Access token reference → caller/client identity on the request.
//!
//! Flow (strictly sequential, once per request):
//! 1. drop any identity a client (or a previous hop) put on the request
//! 2. read `?access_token=` (trimmed); blank => anonymous
//! 3. resolve it through the `TokenResolver`
//! 4. 404 => anonymous, other errors => propagated as-is
//! 5. success => `x-caller-id` / `x-client-id` headers + `Identity` extension

use std::sync::Arc;

use axum::http::{HeaderValue, Request, Uri};

use crate::services::oauth::{
    AccessToken, Identity, RestError, TokenResolver,
    headers::{HEADER_CALLER_ID, HEADER_CLIENT_ID, PARAM_ACCESS_TOKEN},
};

#[derive(Clone)]
pub struct Authenticator {
    resolver: Arc<dyn TokenResolver>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("resolver", &self.resolver.backend_name())
            .finish()
    }
}

impl Authenticator {
    pub fn new(resolver: Arc<dyn TokenResolver>) -> Self {
        Self { resolver }
    }

    /// Authenticate `request` in place.
    ///
    /// `Ok(())` covers both "authenticated" and "anonymous"; only service and
    /// integration failures come back as `Err`, and the caller is expected to
    /// abort the request with that status/message.
    pub async fn authenticate_request<B>(
        &self,
        request: Option<&mut Request<B>>,
    ) -> Result<(), RestError> {
        let Some(request) = request else {
            return Ok(());
        };

        clean_request(request);

        let Some(token_id) = access_token_id(request.uri()) else {
            return Ok(());
        };

        let at = match self.resolver.resolve(&token_id).await {
            Ok(at) => at,
            Err(err) if err.is_not_found() => {
                tracing::debug!("access token not found, continuing as anonymous");
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(
                    status = err.status,
                    error = %err.message,
                    backend = self.resolver.backend_name(),
                    "access token resolution failed"
                );
                return Err(err);
            }
        };

        annotate_request(request, &at);
        Ok(())
    }
}

fn clean_request<B>(request: &mut Request<B>) {
    let headers = request.headers_mut();
    headers.remove(HEADER_CALLER_ID);
    headers.remove(HEADER_CLIENT_ID);
    request.extensions_mut().remove::<Identity>();
}

/// First `access_token` query value, percent-decoded and trimmed. `None` when blank.
fn access_token_id(uri: &Uri) -> Option<String> {
    let query = uri.query()?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == PARAM_ACCESS_TOKEN)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn annotate_request<B>(request: &mut Request<B>, at: &AccessToken) {
    let headers = request.headers_mut();
    headers.insert(HEADER_CALLER_ID, HeaderValue::from(at.user_id));
    headers.insert(HEADER_CLIENT_ID, HeaderValue::from(at.client_id));
    request.extensions_mut().insert(Identity::from(at));
}
