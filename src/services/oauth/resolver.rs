//! Token resolver interface consumed by the authenticator.
use async_trait::async_trait;

use crate::services::oauth::{AccessToken, RestError};

/// Maps an access token reference to its metadata.
///
/// Errors are classified:
/// - `status == 404`: unknown token (the authenticator treats this as anonymous)
/// - anything else: service or integration failure, propagated to the caller
///
/// Implementations must be shareable across requests (`Arc<dyn TokenResolver>`).
#[async_trait]
pub trait TokenResolver: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn resolve(&self, token_id: &str) -> Result<AccessToken, RestError>;
}
