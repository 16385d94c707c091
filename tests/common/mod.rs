#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

/// How long the `slow` token makes the mock service wait before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

/// Mock token service. Behaviour is keyed on the token id.
async fn access_token(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "abc" => Json(json!({"id": "abc", "user_id": 42, "client_id": 7})).into_response(),
        "camel" => Json(json!({"id": "camel", "userId": 1, "clientId": 2})).into_response(),
        "a b/c" => Json(json!({"id": "a b/c", "user_id": 5, "client_id": 6})).into_response(),
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": "database error",
                "status": 500,
                "error": "internal_server_error"
            })),
        )
            .into_response(),
        "unavailable" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"message": "maintenance", "status": 503})),
        )
            .into_response(),
        "body-not-found" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "token revoked", "status": 404})),
        )
            .into_response(),
        "body-ok-status" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "weird", "status": 200})),
        )
            .into_response(),
        "html-error" => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        "partial" => Json(json!({"id": "partial"})).into_response(),
        "slow" => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(json!({"id": "slow", "user_id": 1, "client_id": 1})).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "no access token found with given id",
                "status": 404,
                "error": "not_found"
            })),
        )
            .into_response(),
    }
}

pub fn token_service() -> Router {
    Router::new()
        .route("/oauth/access_token/{id}", get(access_token))
        // A bare 404 from somewhere that isn't the token endpoint.
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 page not found") })
}

/// Serve the mock token service on an ephemeral port and return its base url.
pub async fn spawn_token_service() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, token_service()).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Base url of a port nobody listens on.
pub async fn dead_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}
