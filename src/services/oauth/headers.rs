//! Well-known identity headers and their read-side accessors.
//!
//! The total accessors (`get_caller_id` / `get_client_id`) never fail: `0` means
//! "no authenticated identity of this kind". Use `caller_id` / `client_id` when
//! the caller needs to tell "absent" apart from a literal zero.

use axum::http::{HeaderMap, HeaderName};

/// Marks a request as exempt from authentication.
pub const HEADER_PUBLIC: HeaderName = HeaderName::from_static("x-public");
/// Authenticated end-user id. Only trusted when set by the authenticator.
pub const HEADER_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");
/// Authenticated client (application) id. Only trusted when set by the authenticator.
pub const HEADER_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");

/// Query parameter carrying the access token reference (`?access_token=abc`).
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// `None` (no request) counts as public.
pub fn is_public(headers: Option<&HeaderMap>) -> bool {
    let Some(headers) = headers else {
        return true;
    };

    headers
        .get(HEADER_PUBLIC)
        .is_some_and(|v| v.as_bytes() == b"true")
}

pub fn get_caller_id(headers: Option<&HeaderMap>) -> i64 {
    headers.and_then(caller_id).unwrap_or(0)
}

pub fn get_client_id(headers: Option<&HeaderMap>) -> i64 {
    headers.and_then(client_id).unwrap_or(0)
}

pub fn caller_id(headers: &HeaderMap) -> Option<i64> {
    parse_id(headers, &HEADER_CALLER_ID)
}

pub fn client_id(headers: &HeaderMap) -> Option<i64> {
    parse_id(headers, &HEADER_CLIENT_ID)
}

fn parse_id(headers: &HeaderMap, name: &HeaderName) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.parse::<i64>().ok()
}
