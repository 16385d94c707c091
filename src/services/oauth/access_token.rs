use serde::Deserialize;

/// Token metadata returned by `GET /oauth/access_token/{id}`.
///
/// Only lives for the duration of one lookup; the two ids are copied onto the
/// request and the value is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub id: String,
    #[serde(alias = "userId")]
    pub user_id: i64,
    #[serde(alias = "clientId")]
    pub client_id: i64,
}

/// Resolved identity attached to the request extensions after a successful lookup.
///
/// Handlers should prefer this over the `x-caller-id` / `x-client-id` headers:
/// an absent extension means "anonymous", with no zero sentinel involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub caller_id: i64,
    pub client_id: i64,
}

impl From<&AccessToken> for Identity {
    fn from(at: &AccessToken) -> Self {
        Self {
            caller_id: at.user_id,
            client_id: at.client_id,
        }
    }
}
