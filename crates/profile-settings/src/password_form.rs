//! The password-update form component.

use std::sync::Arc;

use tracing::{debug, instrument};

use gantry_profile_forms::{policy, FormState};
use gantry_profile_rest::{PasswordUpdateRequest, ProfileRestClient};

use crate::mutation::MutationState;
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::telemetry::{ErrorReporter, TracingReporter};

/// Form field name for the current password.
pub const CURRENT_PASSWORD: &str = "currentPassword";
/// Form field name for the new password.
pub const NEW_PASSWORD: &str = "newPassword";
/// Form field name for the repeated new password.
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

/// Field-level error shown when the new and repeated passwords differ.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

const PASSWORD_SET_MESSAGE: &str = "Password was set successfully";
const SET_PASSWORD_ERROR_PREFIX: &str = "Error while setting password";

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing was sent.
    InFlight,
    /// New and repeated passwords differ; a field error was set, nothing
    /// was sent.
    Mismatch,
    /// Required or policy rules failed; field errors were set, nothing was
    /// sent.
    Invalid,
    /// The password was updated.
    Succeeded,
    /// The request failed; field values are left intact for retry.
    Failed,
}

/// The password-update form: three secret fields, a status-tracked
/// mutation, and the success/failure side effects.
///
/// On success the fields are cleared, the optional success callback fires
/// once, and a positive toast is shown. On failure a negative toast is
/// shown, the failure is forwarded to telemetry unless it is a validation
/// failure (HTTP 400), and the field values are kept so the user can
/// retry.
pub struct PasswordUpdateForm {
    client: ProfileRestClient,
    form: FormState,
    mutation: MutationState,
    notifier: Arc<dyn Notifier>,
    reporter: Arc<dyn ErrorReporter>,
    on_success: Option<Box<dyn Fn() + Send + Sync>>,
}

impl std::fmt::Debug for PasswordUpdateForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordUpdateForm")
            .field("form", &self.form)
            .field("mutation", &self.mutation)
            .finish_non_exhaustive()
    }
}

impl PasswordUpdateForm {
    /// Create a form bound to the given API client.
    pub fn new(client: ProfileRestClient) -> Self {
        let form = FormState::new()
            .with_sensitive_field(CURRENT_PASSWORD, policy::current_password_rules())
            .with_sensitive_field(NEW_PASSWORD, policy::password_rules())
            .with_sensitive_field(CONFIRM_PASSWORD, policy::password_rules());

        Self {
            client,
            form,
            mutation: MutationState::Idle,
            notifier: Arc::new(TracingNotifier),
            reporter: Arc::new(TracingReporter),
            on_success: None,
        }
    }

    /// Replace the notification seam.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the telemetry seam.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Register a callback invoked once per successful submission.
    pub fn on_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Set the current-password field.
    pub fn set_current_password(&mut self, value: impl Into<String>) {
        // Registered in new(), lookup cannot fail
        let _ = self.form.set_value(CURRENT_PASSWORD, value);
    }

    /// Set the new-password field.
    pub fn set_new_password(&mut self, value: impl Into<String>) {
        let _ = self.form.set_value(NEW_PASSWORD, value);
    }

    /// Set the repeated-password field.
    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        let _ = self.form.set_value(CONFIRM_PASSWORD, value);
    }

    /// The form state (values and per-field errors).
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The mutation status.
    pub fn mutation(&self) -> &MutationState {
        &self.mutation
    }

    /// True while a submission is in flight; the host shows its loading
    /// indicator off this.
    pub fn is_loading(&self) -> bool {
        self.mutation.is_pending()
    }

    /// True whenever the form's combined validity is false, independent of
    /// in-flight state.
    pub fn is_submit_disabled(&self) -> bool {
        !self.form.is_valid()
    }

    /// The raw failure message for inline display, when the last
    /// submission failed.
    pub fn error_message(&self) -> Option<String> {
        self.mutation.error().map(|error| {
            error
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string())
        })
    }

    /// Submit the form.
    ///
    /// The mismatch check runs before anything else so the user always
    /// learns about differing passwords first; required and policy rules
    /// are checked next; only a fully valid form issues the request.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.mutation.is_pending() {
            debug!("submission already in flight");
            return SubmitOutcome::InFlight;
        }

        let new_password = self.form.value(NEW_PASSWORD).unwrap_or_default().to_string();
        let confirm_password = self
            .form
            .value(CONFIRM_PASSWORD)
            .unwrap_or_default()
            .to_string();
        if new_password != confirm_password {
            let _ = self.form.set_error(CONFIRM_PASSWORD, PASSWORDS_DO_NOT_MATCH);
            return SubmitOutcome::Mismatch;
        }

        if !self.form.validate() {
            return SubmitOutcome::Invalid;
        }

        let current_password = self
            .form
            .value(CURRENT_PASSWORD)
            .unwrap_or_default()
            .to_string();
        let request = PasswordUpdateRequest::new(current_password, new_password, confirm_password);

        self.mutation = MutationState::Pending;
        match self.client.update_password(&request).await {
            Ok(()) => {
                self.form.reset();
                self.mutation = MutationState::Succeeded;
                self.notifier
                    .notify(Notification::positive(PASSWORD_SET_MESSAGE));
                if let Some(callback) = &self.on_success {
                    callback();
                }
                SubmitOutcome::Succeeded
            }
            Err(error) => {
                let message = match error.server_message() {
                    Some(server_message) => {
                        format!("{SET_PASSWORD_ERROR_PREFIX}: {server_message}")
                    }
                    None => SET_PASSWORD_ERROR_PREFIX.to_string(),
                };
                self.notifier.notify(Notification::negative(message));

                if !error.is_validation_error() {
                    self.reporter.report(&error);
                }

                self.mutation = MutationState::Failed(error);
                SubmitOutcome::Failed
            }
        }
    }
}
