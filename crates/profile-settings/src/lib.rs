//! # profile-settings
//!
//! Composition layer for the Gantry profile settings surface.
//!
//! This crate wires the form state from `profile-forms` to the API surface
//! from `profile-rest` and owns everything the settings page does that is
//! not rendering:
//!
//! - **[`PasswordUpdateForm`]** - the password-update flow: local validation,
//!   a status-tracked mutation, success callback, toasts, and the 400-vs-rest
//!   telemetry split
//! - **[`Countdown`]** - an owned, cancellable one-second-tick timer task
//! - **[`VerificationSection`] / [`VerificationFlow`]** - resend-verification
//!   messaging gated by the countdown
//! - **[`ProfilePage`]** - the read-only page view model and the sidebar
//!   state machine
//! - **[`Notifier`] / [`ErrorReporter`]** - seams for the host's toast and
//!   telemetry subsystems
//!
//! ## Example
//!
//! ```rust,ignore
//! use gantry_profile_rest::ProfileRestClient;
//! use gantry_profile_settings::PasswordUpdateForm;
//!
//! let client = ProfileRestClient::new("https://api.gantry.example", "token")?;
//! let mut form = PasswordUpdateForm::new(client);
//!
//! form.set_current_password("old-secret");
//! form.set_new_password("NewPass1!");
//! form.set_confirm_password("NewPass1!");
//!
//! let outcome = form.submit().await;
//! ```

mod countdown;
mod mutation;
mod notify;
mod page;
mod password_form;
mod telemetry;
mod verification;

pub use countdown::Countdown;
pub use mutation::MutationState;
pub use notify::{BufferedNotifier, Notification, Notifier, Severity, TracingNotifier};
pub use page::{InvalidTransition, ProfilePage, SidebarState, PASSWORD_MASK, SET_PASSWORD_PROMPT};
pub use password_form::{
    PasswordUpdateForm, SubmitOutcome, CONFIRM_PASSWORD, CURRENT_PASSWORD, NEW_PASSWORD,
    PASSWORDS_DO_NOT_MATCH,
};
pub use telemetry::{BufferedReporter, ErrorReporter, TracingReporter};
pub use verification::{VerificationFlow, VerificationSection, RESEND_COOLDOWN_SECS};
