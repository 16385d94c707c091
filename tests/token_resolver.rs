//! `HttpTokenResolver` against a live mock token service.

mod common;

use std::time::Duration;

use access_guard::{HttpTokenResolver, OAuthClientConfig, TokenResolver};
use url::Url;

use common::{dead_base_url, spawn_token_service};

fn resolver(base_url: Url) -> HttpTokenResolver {
    HttpTokenResolver::new(OAuthClientConfig::new(base_url).with_timeout(Duration::from_millis(500)))
        .unwrap()
}

#[tokio::test]
async fn resolves_known_token() {
    let resolver = resolver(spawn_token_service().await);

    let at = resolver.resolve("abc").await.unwrap();

    assert_eq!(at.id, "abc");
    assert_eq!(at.user_id, 42);
    assert_eq!(at.client_id, 7);
}

#[tokio::test]
async fn accepts_camel_case_body() {
    let resolver = resolver(spawn_token_service().await);

    let at = resolver.resolve("camel").await.unwrap();

    assert_eq!((at.user_id, at.client_id), (1, 2));
}

#[tokio::test]
async fn token_id_is_path_encoded() {
    let resolver = resolver(spawn_token_service().await);

    let at = resolver.resolve("a b/c").await.unwrap();

    assert_eq!(at.id, "a b/c");
    assert_eq!(at.user_id, 5);
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let resolver = resolver(spawn_token_service().await);

    let err = resolver.resolve("nope").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "no access token found with given id");
}

#[tokio::test]
async fn bare_404_is_still_not_found() {
    let mut base = spawn_token_service().await;
    base.set_path("/elsewhere");
    let resolver = resolver(base);

    let err = resolver.resolve("abc").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn structured_body_status_decides_not_found() {
    let resolver = resolver(spawn_token_service().await);

    let err = resolver.resolve("body-not-found").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.message, "token revoked");
}

#[tokio::test]
async fn structured_service_error_is_passed_through() {
    let resolver = resolver(spawn_token_service().await);

    let err = resolver.resolve("broken").await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "database error");
    assert_eq!(err.error, "internal_server_error");

    let err = resolver.resolve("unavailable").await.unwrap_err();
    assert_eq!(err.status, 503);
    assert_eq!(err.message, "maintenance");
}

#[tokio::test]
async fn undecodable_error_body_is_internal() {
    let resolver = resolver(spawn_token_service().await);

    let err = resolver.resolve("html-error").await.unwrap_err();

    assert_eq!(err.status, 500);
    assert_eq!(
        err.message,
        "invalid error interface when trying to get access token"
    );
}

#[tokio::test]
async fn malformed_success_body_is_internal() {
    let resolver = resolver(spawn_token_service().await);

    for id in ["garbage", "partial"] {
        let err = resolver.resolve(id).await.unwrap_err();
        assert_eq!(err.status, 500, "{id}");
        assert_eq!(
            err.message, "error when trying to unmarshal access token response",
            "{id}"
        );
    }
}

#[tokio::test]
async fn timeout_is_internal_error() {
    let base_url = spawn_token_service().await;
    let resolver = HttpTokenResolver::new(
        OAuthClientConfig::new(base_url).with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let started = std::time::Instant::now();
    let err = resolver.resolve("slow").await.unwrap_err();

    assert_eq!(err.status, 500);
    assert!(!err.is_not_found());
    assert!(started.elapsed() < common::SLOW_DELAY);
}

#[tokio::test]
async fn unreachable_service_is_internal_error() {
    let resolver = resolver(dead_base_url().await);

    let err = resolver.resolve("abc").await.unwrap_err();

    assert_eq!(err.status, 500);
    assert_eq!(
        err.message,
        "invalid restclient response when trying to get access token"
    );
}
