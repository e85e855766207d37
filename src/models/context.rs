use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};

use super::response::ValidationResponse;

/// Authenticated caller context mapped from a valid endpoint response.
///
/// Immutable once constructed and scoped to the request that produced
/// it. Metadata keys populated when the source fields are present:
/// `email`, `firstname`, `surname`, `phone_number`,
/// `profile_completed_at`, `token_name`, `token_id`, `token_expires_at`.
/// An absent source field is an absent key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Option<String>,
    pub scopes: HashSet<String>,
    pub metadata: BTreeMap<String, String>,
}

impl AuthContext {
    pub fn from_response(response: ValidationResponse) -> Self {
        let ValidationResponse {
            user,
            token,
            scopes,
            ..
        } = response;

        let mut metadata = BTreeMap::new();
        let mut insert = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                metadata.insert(key.to_string(), value);
            }
        };
        insert("email", user.email);
        insert("firstname", user.firstname);
        insert("surname", user.surname);
        insert("phone_number", user.phone_number);
        insert("profile_completed_at", user.profile_completed_at);
        insert("token_name", token.name);
        insert("token_id", token.id);
        insert("token_expires_at", token.expires_at);

        Self {
            user_id: user.id,
            scopes: scopes.into_iter().collect(),
            metadata,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }

    /// Token expiry as reported by the endpoint, absent when missing or
    /// not a valid RFC 3339 timestamp.
    pub fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("token_expires_at")
    }

    pub fn profile_completed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("profile_completed_at")
    }

    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key)
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Check a granted scope against a required one. A granted `*`
    /// matches everything, a trailing `*` matches by prefix.
    pub fn has_scope(&self, required: &str) -> bool {
        for granted in &self.scopes {
            if granted == "*" || granted == required {
                return true;
            }
            if let Some(prefix) = granted.strip_suffix('*') {
                if required.starts_with(prefix) {
                    return true;
                }
            }
        }
        false
    }
}
