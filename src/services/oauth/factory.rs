/// Factory: build the `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::oauth::{Authenticator, HttpTokenResolver, OAuthClientConfig};

pub fn build_authenticator(config: &Config) -> anyhow::Result<Arc<Authenticator>> {
    let client_config = OAuthClientConfig::new(config.oauth_base_url.clone())
        .with_timeout(config.oauth_timeout);

    let resolver = HttpTokenResolver::new(client_config)?;

    tracing::info!(
        base_url = %config.oauth_base_url,
        timeout_ms = config.oauth_timeout.as_millis() as u64,
        "token resolver configured"
    );

    Ok(Arc::new(Authenticator::new(Arc::new(resolver))))
}
