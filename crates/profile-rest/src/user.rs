//! Current-user API types.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile, as returned by `GET /v1/users/me`.
///
/// Injected explicitly into view models that need it; nothing in this
/// workspace reads ambient authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrentUser {
    /// The user's email address.
    pub email: String,
    /// Whether the user has a password set.
    #[serde(rename = "hasPassword")]
    pub has_password: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_deserialization() {
        let json = r#"{"email":"user@example.com","hasPassword":true}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "user@example.com");
        assert!(user.has_password);
    }

    #[test]
    fn test_current_user_without_password() {
        let json = r#"{"email":"new@example.com","hasPassword":false}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert!(!user.has_password);
    }
}
