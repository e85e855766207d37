pub mod validator;

pub use validator::TokenValidator;

use async_trait::async_trait;

use crate::models::AuthContext;

/// Narrow capability the host's request-authorization layer consumes.
///
/// Implementations resolve a bearer token to an authenticated context,
/// or `None` when the token is invalid or validation cannot be
/// completed. They must never panic or surface an error.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, bearer_token: &str) -> Option<AuthContext>;
}
