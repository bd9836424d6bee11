/// Account types
use serde::{Deserialize, Serialize};

/// Kind of account a user registered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Client,
    Provider,
}

/// User account as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (numeric ids are sent as strings)
    pub id: String,

    /// Display name
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Account creation timestamp (ISO string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<AccountType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
}

/// A user paired with the bearer credential issued for the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_minimal_payload() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "42",
            "name": "Aida",
            "email": "aida@example.com"
        }))
        .unwrap();

        assert_eq!(user.id, "42");
        assert_eq!(user.phone, "");
        assert!(user.user_type.is_none());
        assert!(user.is_blocked.is_none());
    }

    #[test]
    fn test_user_uses_camel_case_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "7",
            "name": "Timur",
            "email": "timur@example.com",
            "phone": "+7 700 000 00 00",
            "userType": "provider",
            "businessName": "Timur Plumbing",
            "isBlocked": false,
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.user_type, Some(AccountType::Provider));
        assert_eq!(user.business_name.as_deref(), Some("Timur Plumbing"));
        assert_eq!(user.is_blocked, Some(false));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userType"], "provider");
        assert!(json.get("avatar").is_none());
    }
}
