//! Email-verification API types.

use serde::Serialize;

/// Request body for `POST /v1/auth/verification/resend`.
#[derive(Debug, Clone, Serialize)]
pub struct ResendVerificationRequest {
    /// The email address to send the verification link to.
    pub email: String,
}

impl ResendVerificationRequest {
    /// Create a new resend request for the given address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resend_request_serialization() {
        let request = ResendVerificationRequest::new("user@example.com");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"email": "user@example.com"}));
    }
}
