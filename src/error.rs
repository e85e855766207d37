use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for a single validation call.
///
/// None of these ever escape [`crate::TokenValidator::validate`] or
/// [`crate::TokenValidator::validate_raw`]; the enum exists for the
/// low-level request path and for logging.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Validation request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("Transport failure calling validation endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Validation endpoint returned status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Failed to decode validation response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ValidatorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ValidatorError::Timeout(err)
        } else if err.is_decode() {
            ValidatorError::Decode(err)
        } else {
            // Connection refused, DNS, TLS, and anything else reqwest
            // surfaces during the exchange.
            ValidatorError::Transport(err)
        }
    }
}
