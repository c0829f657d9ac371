//! Gantry profile REST API client.
//!
//! This client wraps `GantryClient` from `profile-client` and provides
//! typed methods for the profile-settings surface.

use tracing::instrument;

use gantry_profile_client::{ClientConfig, GantryClient};

use crate::error::Result;
use crate::password::PasswordUpdateRequest;
use crate::user::CurrentUser;
use crate::verification::ResendVerificationRequest;

/// Gantry profile REST API client.
///
/// Provides typed methods for the profile-settings surface:
/// - Update the user's password
/// - Fetch the authenticated user's profile
/// - Resend the verification email
///
/// # Example
///
/// ```rust,ignore
/// use gantry_profile_rest::{PasswordUpdateRequest, ProfileRestClient};
///
/// let client = ProfileRestClient::new(
///     "https://api.gantry.example",
///     "session-token",
/// )?;
///
/// let request = PasswordUpdateRequest::new("old-secret", "NewPass1!", "NewPass1!");
/// client.update_password(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProfileRestClient {
    client: GantryClient,
}

impl ProfileRestClient {
    /// Create a new REST client with the given base URL and access token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = GantryClient::new(base_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = GantryClient::with_config(base_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing GantryClient.
    pub fn from_client(client: GantryClient) -> Self {
        Self { client }
    }

    /// Get the underlying GantryClient.
    pub fn client(&self) -> &GantryClient {
        &self.client
    }

    /// Update the authenticated user's password.
    ///
    /// A 400 response means the current password was wrong or the new one
    /// violates server policy; any other failure is a system fault.
    #[instrument(skip(self, request))]
    pub async fn update_password(&self, request: &PasswordUpdateRequest) -> Result<()> {
        self.client
            .post_unit("/v1/auth/update-password", request)
            .await?;
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<CurrentUser> {
        let user = self.client.get_json("/v1/users/me").await?;
        Ok(user)
    }

    /// Resend the verification email to the given address.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn resend_verification(&self, email: &str) -> Result<()> {
        let request = ResendVerificationRequest::new(email);
        self.client
            .post_unit("/v1/auth/verification/resend", &request)
            .await?;
        Ok(())
    }
}
