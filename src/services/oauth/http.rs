//! HTTP-backed token resolver (`GET {base_url}/oauth/access_token/{id}`).
//!
//! Classification of the remote exchange:
//! - transport failure / timeout / unreadable body => 500 (internal)
//! - 404 => not found (anonymous upstream)
//! - other status > 299 => the remote's structured `RestError`, or 500 if it can't be decoded
//! - 2xx => `AccessToken`, or 500 if the body doesn't match
//!
//! No retries and no caching: every call is a fresh round-trip.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::services::oauth::{AccessToken, RestError, TokenResolver};

const MSG_INVALID_RESPONSE: &str = "invalid restclient response when trying to get access token";
const MSG_INVALID_ERROR: &str = "invalid error interface when trying to get access token";
const MSG_INVALID_TOKEN: &str = "error when trying to unmarshal access token response";
const MSG_NOT_FOUND: &str = "no access token found with given id";

/// Connection settings for the token service.
///
/// Kept separate from `Config` so the resolver can be built in tests without env.
#[derive(Debug, Clone)]
pub struct OAuthClientConfig {
    pub base_url: Url,
    // Upper bound for the whole exchange (connect + response + body).
    pub timeout: Duration,
}

impl OAuthClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Error)]
pub enum ResolverInitError {
    #[error("token service base url cannot carry a path: {0}")]
    InvalidBaseUrl(Url),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpTokenResolver {
    client: Client,
    base_url: Url,
}

impl HttpTokenResolver {
    pub fn new(config: OAuthClientConfig) -> Result<Self, ResolverInitError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ResolverInitError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// `{base_url}/oauth/access_token/{token_id}`, with `token_id` encoded as one path segment.
    pub fn token_url(&self, token_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base() was rejected in `new`, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["oauth", "access_token", token_id]);
        }
        url
    }
}

#[async_trait]
impl TokenResolver for HttpTokenResolver {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn resolve(&self, token_id: &str) -> Result<AccessToken, RestError> {
        let url = self.token_url(token_id);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    timeout = err.is_timeout(),
                    "token service request failed"
                );
                return Err(RestError::internal_server_error(MSG_INVALID_RESPONSE));
            }
        };

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::warn!(error = %err, %status, "failed to read token service response");
            RestError::internal_server_error(MSG_INVALID_RESPONSE)
        })?;

        if status == StatusCode::NOT_FOUND {
            // Keep the remote's message when it sent one, but the classification
            // always follows the status line.
            let message = serde_json::from_slice::<RestError>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| MSG_NOT_FOUND.to_string());
            return Err(RestError::not_found(message));
        }

        if status.as_u16() > 299 {
            return Err(match serde_json::from_slice::<RestError>(&body) {
                Ok(rest_err) => rest_err,
                Err(err) => {
                    tracing::warn!(error = %err, %status, "undecodable token service error body");
                    RestError::internal_server_error(MSG_INVALID_ERROR)
                }
            });
        }

        serde_json::from_slice::<AccessToken>(&body).map_err(|err| {
            tracing::warn!(error = %err, "undecodable access token body");
            RestError::internal_server_error(MSG_INVALID_TOKEN)
        })
    }
}
