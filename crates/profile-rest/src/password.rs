//! Password update API types.
//!
//! The three password fields are secret strings: they are redacted in Debug
//! output and only exposed at the serialization boundary.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Request body for `POST /v1/auth/update-password`.
///
/// Equality of `new_password` and `confirm_password` is checked by the form
/// component before any request is built; the server applies its own policy
/// on top.
#[derive(Debug, Serialize)]
pub struct PasswordUpdateRequest {
    /// The user's current password.
    #[serde(rename = "currentPassword", serialize_with = "expose")]
    pub current_password: SecretString,
    /// The new password.
    #[serde(rename = "newPassword", serialize_with = "expose")]
    pub new_password: SecretString,
    /// The new password, repeated.
    #[serde(rename = "confirmPassword", serialize_with = "expose")]
    pub confirm_password: SecretString,
}

impl PasswordUpdateRequest {
    /// Create a new password update request.
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: SecretString::from(current_password.into()),
            new_password: SecretString::from(new_password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
