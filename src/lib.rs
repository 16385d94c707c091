//! Access token authentication for axum resource servers.
//!
//! Requests carrying `?access_token=<id>` are resolved against a remote OAuth
//! token service; on success the caller and client ids are attached to the
//! request (`x-caller-id` / `x-client-id` headers and an `Identity`
//! extension). Unknown or missing tokens leave the request anonymous.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use services::oauth::{
    AccessToken, Authenticator, HttpTokenResolver, Identity, OAuthClientConfig, RestError,
    TokenResolver,
};
