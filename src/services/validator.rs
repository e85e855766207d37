use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::ValidatorSettings;
use crate::error::ValidatorError;
use crate::models::{AuthContext, ValidationResponse};

use super::TokenVerifier;

/// Client for the remote token-validation endpoint.
///
/// Holds a shared connection pool, so construct it once at startup and
/// hand out clones or an `Arc`; the pool is released when the last
/// handle is dropped. Safe for concurrent use - each call is an
/// independent request bounded by the configured timeout.
#[derive(Clone)]
pub struct TokenValidator {
    client: Client,
    settings: ValidatorSettings,
}

impl TokenValidator {
    pub fn new(settings: ValidatorSettings) -> Result<Self, ValidatorError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(ValidatorError::Client)?;

        Ok(Self { client, settings })
    }

    pub fn validation_url(&self) -> &str {
        &self.settings.validation_url
    }

    /// Validate a bearer token and map the response into an
    /// [`AuthContext`].
    ///
    /// Fail-closed: a non-200 status, a `valid: false` answer, a
    /// timeout, a transport failure, or an undecodable body all resolve
    /// to `None`. Nothing is ever surfaced as an error to the caller.
    pub async fn validate(&self, bearer_token: &str) -> Option<AuthContext> {
        let response = self.validate_raw(bearer_token).await?;

        if !response.valid {
            tracing::debug!("Validation endpoint rejected token");
            return None;
        }

        Some(AuthContext::from_response(response))
    }

    /// Same endpoint call, but returns the parsed response unmapped, for
    /// callers that want the endpoint's data verbatim. A 200 answer is
    /// returned even when `valid` is false; every failure is `None`.
    pub async fn validate_raw(&self, bearer_token: &str) -> Option<ValidationResponse> {
        match self.post_validation(bearer_token).await {
            Ok(response) => Some(response),
            Err(err) => {
                log_failure(&err);
                None
            }
        }
    }

    /// Single low-level exchange with the endpoint. Both public variants
    /// go through here; the HTTP logic exists exactly once.
    async fn post_validation(
        &self,
        bearer_token: &str,
    ) -> Result<ValidationResponse, ValidatorError> {
        let response = self
            .client
            .post(&self.settings.validation_url)
            .bearer_auth(bearer_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ValidatorError::UnexpectedStatus(status));
        }

        Ok(response.json::<ValidationResponse>().await?)
    }
}

fn log_failure(err: &ValidatorError) {
    match err {
        ValidatorError::UnexpectedStatus(status) => {
            tracing::warn!(%status, "Validation endpoint returned non-OK status");
        }
        ValidatorError::Timeout(_) => {
            tracing::warn!("Validation request timed out");
        }
        ValidatorError::Transport(source) => {
            tracing::error!(error = %source, "Transport failure calling validation endpoint");
        }
        ValidatorError::Decode(source) => {
            tracing::error!(error = %source, "Failed to decode validation response");
        }
        ValidatorError::Client(source) => {
            tracing::error!(error = %source, "HTTP client failure");
        }
    }
}

#[async_trait]
impl TokenVerifier for TokenValidator {
    async fn verify(&self, bearer_token: &str) -> Option<AuthContext> {
        self.validate(bearer_token).await
    }
}
