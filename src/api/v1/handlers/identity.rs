/*
 * Responsibility
 * - GET /whoami: echo what the header accessors see (0 = anonymous)
 * - GET /me: identity required (401 when anonymous, unless public)
 */
use axum::{Json, http::HeaderMap};
use serde::Serialize;

use crate::api::v1::extractors::RequireCaller;
use crate::services::oauth::headers;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub caller_id: Option<i64>,
    pub client_id: Option<i64>,
}

pub async fn whoami(req_headers: HeaderMap) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        caller_id: headers::get_caller_id(Some(&req_headers)),
        client_id: headers::get_client_id(Some(&req_headers)),
        public: headers::is_public(Some(&req_headers)),
    })
}

pub async fn me(RequireCaller(identity): RequireCaller) -> Json<MeResponse> {
    Json(MeResponse {
        caller_id: identity.map(|i| i.caller_id),
        client_id: identity.map(|i| i.client_id),
    })
}
