//! # gantry-profile-api
//!
//! A client library for the Gantry user-profile settings surface.
//!
//! This library provides the client half of the profile settings page:
//! typed API calls, form state and validation, mutation status tracking,
//! countdown-gated verification resend, and notification/telemetry seams.
//! It owns no rendering.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - Sensitive data (tokens, passwords) are redacted in Debug output
//! - Tracing/logging skips secret payloads
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **gantry-profile-client** - Core HTTP client infrastructure with error
//!   handling and secret redaction
//! - **gantry-profile-rest** - Typed API surface: update-password,
//!   current-user, resend-verification
//! - **gantry-profile-forms** - Form state, validation rules, the shared
//!   password policy
//! - **gantry-profile-settings** - Composition: the password-update form,
//!   countdown timer, verification flow, page view model
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gantry_profile_api::rest::ProfileRestClient;
//! use gantry_profile_api::settings::PasswordUpdateForm;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProfileRestClient::new(
//!         "https://api.gantry.example",
//!         "session-token",
//!     )?;
//!
//!     let mut form = PasswordUpdateForm::new(client);
//!     form.set_current_password("old-secret");
//!     form.set_new_password("NewPass1!");
//!     form.set_confirm_password("NewPass1!");
//!
//!     let outcome = form.submit().await;
//!     println!("{outcome:?}");
//!
//!     Ok(())
//! }
//! ```

// Re-export the surface crates for convenient access
#[cfg(feature = "client")]
pub use gantry_profile_client as client;
#[cfg(feature = "forms")]
pub use gantry_profile_forms as forms;
#[cfg(feature = "rest")]
pub use gantry_profile_rest as rest;
#[cfg(feature = "settings")]
pub use gantry_profile_settings as settings;
