//! Client library for remote bearer-token validation.
//!
//! Forwards a bearer token to a configured validation endpoint and maps
//! the JSON response into an in-process [`AuthContext`]. Every failure
//! path collapses to "unauthenticated" - the validator never errors out
//! to its caller.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::ValidatorSettings;
pub use error::ValidatorError;
pub use models::{AuthContext, ValidationResponse};
pub use services::{TokenValidator, TokenVerifier};
