use serde::{Deserialize, Serialize};

/// Body returned by the validation endpoint.
///
/// This is an external contract the endpoint owns, so it is treated as
/// untrusted input: every level defaults, every field tolerates absence.
/// Field names follow the endpoint's JSON (camelCase where it uses it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationResponse {
    pub valid: bool,
    pub user: UserPayload,
    pub token: TokenPayload,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub id: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "profileCompletedAt")]
    pub profile_completed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let response: ValidationResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.valid);
        assert_eq!(response.user, UserPayload::default());
        assert_eq!(response.token, TokenPayload::default());
        assert!(response.scopes.is_empty());
    }

    #[test]
    fn test_wire_names_map_to_snake_case() {
        let response: ValidationResponse = serde_json::from_value(serde_json::json!({
            "valid": true,
            "user": {
                "phoneNumber": "+33123456789",
                "profileCompletedAt": "2026-01-15T09:30:00.000Z"
            },
            "token": { "expiresAt": "2026-12-31T23:59:59.000Z" },
            "scopes": ["read:data"]
        }))
        .unwrap();

        assert_eq!(response.user.phone_number.as_deref(), Some("+33123456789"));
        assert_eq!(
            response.user.profile_completed_at.as_deref(),
            Some("2026-01-15T09:30:00.000Z")
        );
        assert_eq!(
            response.token.expires_at.as_deref(),
            Some("2026-12-31T23:59:59.000Z")
        );
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let response: ValidationResponse = serde_json::from_value(serde_json::json!({
            "valid": true,
            "user": { "id": "u1", "email": null },
            "token": { "name": null },
            "scopes": []
        }))
        .unwrap();

        assert_eq!(response.user.id.as_deref(), Some("u1"));
        assert!(response.user.email.is_none());
        assert!(response.token.name.is_none());
    }
}
