pub mod access_token;
pub mod authenticator;
pub mod factory;
pub mod headers;
pub mod http;
pub mod resolver;
pub mod rest_error;

pub use access_token::{AccessToken, Identity};
pub use authenticator::Authenticator;
pub use factory::build_authenticator;
pub use http::{HttpTokenResolver, OAuthClientConfig};
pub use resolver::TokenResolver;
pub use rest_error::RestError;
