//! Transport layers wrapped around the whole router.
//!
//! - `x-request-id`: generated when the client sent none, echoed on the response
//! - request span: method, path and request id. The query string is left out on
//!   purpose, it carries the access token reference.
//! - body limit (the service only reads headers and the query string)
//! - overall request timeout from `Config::request_timeout`. The token lookup
//!   has its own, shorter bound in `OAuthClientConfig`.
//!
//! Layer errors are rendered through `AppError` so clients always get the same
//! `{"error": {"code", "message"}}` body.

use axum::Router;
use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::http::{Request, StatusCode, header::HeaderName};
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::config::Config;
use crate::error::AppError;
use crate::services::oauth::RestError;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn apply(router: Router, config: &Config) -> Router {
    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            layer_error(err)
        }))
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TimeoutLayer::new(config.request_timeout));

    router.layer(layers)
}

fn request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}

fn layer_error(err: BoxError) -> Response {
    let rest_err = if err.is::<tower::timeout::error::Elapsed>() {
        RestError::new(StatusCode::REQUEST_TIMEOUT, "request_timeout", "request timed out")
    } else {
        tracing::error!(error = %err, "unhandled layer error");
        RestError::internal_server_error("internal server error")
    };

    AppError::from(rest_err).into_response()
}
