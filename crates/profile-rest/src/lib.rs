//! # profile-rest
//!
//! Typed Gantry profile API client.
//!
//! ## Features
//!
//! - **Update password** - `POST /v1/auth/update-password`
//! - **Current user** - `GET /v1/users/me`
//! - **Resend verification** - `POST /v1/auth/verification/resend`
//!
//! ## Example
//!
//! ```rust,ignore
//! use gantry_profile_rest::{PasswordUpdateRequest, ProfileRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gantry_profile_rest::Error> {
//!     let client = ProfileRestClient::new(
//!         "https://api.gantry.example",
//!         "session-token",
//!     )?;
//!
//!     let user = client.current_user().await?;
//!     println!("signed in as {}", user.email);
//!
//!     let request = PasswordUpdateRequest::new("old-secret", "NewPass1!", "NewPass1!");
//!     client.update_password(&request).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod password;
pub mod user;
pub mod verification;

pub use client::ProfileRestClient;
pub use error::{Error, ErrorKind, Result};
pub use password::PasswordUpdateRequest;
pub use user::CurrentUser;
pub use verification::ResendVerificationRequest;

// Re-export profile-client types that users might need
pub use gantry_profile_client::{ClientConfig, ClientConfigBuilder, GantryClient};
