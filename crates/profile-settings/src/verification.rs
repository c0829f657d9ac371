//! Email-verification resend flow.

use tracing::{debug, instrument};

use gantry_profile_rest::ProfileRestClient;

use crate::countdown::Countdown;

/// Seconds the resend action stays disabled after a send.
pub const RESEND_COOLDOWN_SECS: u64 = 60;

/// Pure view model for the resend-verification section.
///
/// Owns neither the timer nor any network call; the parent
/// [`VerificationFlow`] does. Given an email and the current countdown
/// seconds it exposes the explanatory text and the resend gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSection {
    email: String,
    countdown_seconds: u64,
}

impl VerificationSection {
    /// Create a section for the given email and countdown value.
    pub fn new(email: impl Into<String>, countdown_seconds: u64) -> Self {
        Self {
            email: email.into(),
            countdown_seconds,
        }
    }

    /// The email address the link was sent to.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The remaining cooldown seconds.
    pub fn countdown_seconds(&self) -> u64 {
        self.countdown_seconds
    }

    /// The resend action is disabled while the countdown is running.
    pub fn is_resend_disabled(&self) -> bool {
        self.countdown_seconds > 0
    }

    /// The explanatory text above the resend action.
    pub fn sent_notice(&self) -> String {
        format!(
            "We have just sent a verification link to your email address {}. \
             Please verify your email address to proceed with setting a password.",
            self.email
        )
    }

    /// The countdown hint next to the resend action.
    pub fn resend_hint(&self) -> String {
        format!(
            "Didn't get the link? Resend in {} seconds",
            self.countdown_seconds
        )
    }

    /// Invoke the caller-supplied resend handler, unless the cooldown gate
    /// is still active. Returns whether the handler ran.
    pub fn resend<F: FnOnce()>(&self, handler: F) -> bool {
        if self.is_resend_disabled() {
            return false;
        }
        handler();
        true
    }
}

/// The resend-verification flow: owns the countdown and the resend call.
///
/// Each successful send restarts the cooldown; the countdown task dies
/// with this value.
#[derive(Debug)]
pub struct VerificationFlow {
    client: ProfileRestClient,
    email: String,
    countdown: Option<Countdown>,
}

impl VerificationFlow {
    /// Create a flow for the given email address.
    pub fn new(client: ProfileRestClient, email: impl Into<String>) -> Self {
        Self {
            client,
            email: email.into(),
            countdown: None,
        }
    }

    /// The current countdown value (zero when no send happened yet).
    pub fn countdown_seconds(&self) -> u64 {
        self.countdown
            .as_ref()
            .map(Countdown::seconds)
            .unwrap_or(0)
    }

    /// True while the cooldown gate is active.
    pub fn is_resend_disabled(&self) -> bool {
        self.countdown_seconds() > 0
    }

    /// The section view model for the current state.
    pub fn section(&self) -> VerificationSection {
        VerificationSection::new(self.email.clone(), self.countdown_seconds())
    }

    /// Send (or resend) the verification link.
    ///
    /// Returns `Ok(false)` without issuing a request while the cooldown
    /// gate is still active. A successful send restarts the cooldown.
    #[instrument(skip(self))]
    pub async fn send_link(&mut self) -> gantry_profile_rest::Result<bool> {
        if self.is_resend_disabled() {
            debug!(
                seconds = self.countdown_seconds(),
                "resend gated by cooldown"
            );
            return Ok(false);
        }

        self.client.resend_verification(&self.email).await?;
        self.countdown = Some(Countdown::start(RESEND_COOLDOWN_SECS));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_section_gating() {
        let section = VerificationSection::new("user@example.com", 42);
        assert!(section.is_resend_disabled());

        let section = VerificationSection::new("user@example.com", 0);
        assert!(!section.is_resend_disabled());
    }

    #[test]
    fn test_section_text() {
        let section = VerificationSection::new("user@example.com", 9);
        assert_eq!(
            section.sent_notice(),
            "We have just sent a verification link to your email address user@example.com. \
             Please verify your email address to proceed with setting a password."
        );
        assert_eq!(section.resend_hint(), "Didn't get the link? Resend in 9 seconds");
    }

    #[test]
    fn test_section_resend_invokes_handler_only_when_enabled() {
        let mut invoked = false;
        let gated = VerificationSection::new("user@example.com", 5);
        assert!(!gated.resend(|| invoked = true));
        assert!(!invoked);

        let open = VerificationSection::new("user@example.com", 0);
        assert!(open.resend(|| invoked = true));
        assert!(invoked);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_link_issues_request_and_starts_cooldown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/verification/resend"))
            .and(body_json(serde_json::json!({"email": "user@example.com"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProfileRestClient::new(server.uri(), "test-token").unwrap();
        let mut flow = VerificationFlow::new(client, "user@example.com");
        assert!(!flow.is_resend_disabled());

        assert!(flow.send_link().await.unwrap());
        assert_eq!(flow.countdown_seconds(), RESEND_COOLDOWN_SECS);
        assert!(flow.is_resend_disabled());

        // Gated: no second request reaches the server
        assert!(!flow.send_link().await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_elapses_and_reenables_resend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/verification/resend"))
            .respond_with(ResponseTemplate::new(204))
            .expect(2)
            .mount(&server)
            .await;

        let client = ProfileRestClient::new(server.uri(), "test-token").unwrap();
        let mut flow = VerificationFlow::new(client, "user@example.com");

        assert!(flow.send_link().await.unwrap());

        let countdown = flow.countdown.as_ref().unwrap();
        let mut rx = countdown.subscribe();
        while rx.changed().await.is_ok() {
            if *rx.borrow() == 0 {
                break;
            }
        }

        assert!(!flow.is_resend_disabled());
        assert!(flow.send_link().await.unwrap());
    }
}
