//! Profile page view model and sidebar state machine.

use gantry_profile_rest::CurrentUser;

/// Masked indicator shown when the user has a password.
pub const PASSWORD_MASK: &str = "•••••••••••••••";

/// Prompt shown when the user has no password yet.
pub const SET_PASSWORD_PROMPT: &str = "Set a password to enhance security";

/// State of the password-change sidebar hosted by the profile page.
///
/// `Idle → Editing → { Submitting → Idle | Submitting → Failed → Editing }`
///
/// Terminal success returns straight to `Idle`; the form clears its fields
/// on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    /// The sidebar is closed.
    #[default]
    Idle,
    /// The user is editing the password form.
    Editing,
    /// A submission is in flight.
    Submitting,
    /// The last submission failed; the form stays populated for retry.
    Failed,
}

/// Error returned for a transition the sidebar state machine does not
/// allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid sidebar transition: {from:?} -> {to:?}")]
pub struct InvalidTransition {
    pub from: SidebarState,
    pub to: SidebarState,
}

/// Read-only view model for the profile page.
///
/// Reads an explicitly injected [`CurrentUser`]; no ambient authentication
/// state. Renders the email row and the password-status row, and hosts the
/// password-change sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    user: CurrentUser,
    sidebar: SidebarState,
}

impl ProfilePage {
    /// Create the page for the given user.
    pub fn new(user: CurrentUser) -> Self {
        Self {
            user,
            sidebar: SidebarState::Idle,
        }
    }

    /// The email row value.
    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Whether the user has a password set.
    pub fn has_password(&self) -> bool {
        self.user.has_password
    }

    /// The password row value: a masked indicator when a password exists,
    /// otherwise the set-a-password prompt.
    pub fn password_display(&self) -> &'static str {
        if self.user.has_password {
            PASSWORD_MASK
        } else {
            SET_PASSWORD_PROMPT
        }
    }

    /// The sidebar state.
    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    fn transition(&mut self, from: SidebarState, to: SidebarState) -> Result<(), InvalidTransition> {
        if self.sidebar != from {
            return Err(InvalidTransition {
                from: self.sidebar,
                to,
            });
        }
        self.sidebar = to;
        Ok(())
    }

    /// Open the password editor.
    pub fn open_editor(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Idle, SidebarState::Editing)
    }

    /// Close the editor without submitting.
    pub fn close_editor(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Editing, SidebarState::Idle)
    }

    /// A submission left the editor.
    pub fn begin_submit(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Editing, SidebarState::Submitting)
    }

    /// The submission succeeded; the sidebar closes.
    pub fn submit_succeeded(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Submitting, SidebarState::Idle)?;
        self.user.has_password = true;
        Ok(())
    }

    /// The submission failed.
    pub fn submit_failed(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Submitting, SidebarState::Failed)
    }

    /// Return to editing after a failure.
    pub fn resume_editing(&mut self) -> Result<(), InvalidTransition> {
        self.transition(SidebarState::Failed, SidebarState::Editing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(has_password: bool) -> CurrentUser {
        CurrentUser {
            email: "user@example.com".to_string(),
            has_password,
        }
    }

    #[test]
    fn test_password_row_masked_when_set() {
        let page = ProfilePage::new(user(true));
        assert_eq!(page.email(), "user@example.com");
        assert_eq!(page.password_display(), PASSWORD_MASK);
    }

    #[test]
    fn test_password_row_prompts_when_unset() {
        let page = ProfilePage::new(user(false));
        assert_eq!(page.password_display(), SET_PASSWORD_PROMPT);
    }

    #[test]
    fn test_happy_path_returns_to_idle() {
        let mut page = ProfilePage::new(user(false));

        page.open_editor().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Editing);

        page.begin_submit().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Submitting);

        page.submit_succeeded().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Idle);
        // A freshly set password is now masked
        assert_eq!(page.password_display(), PASSWORD_MASK);
    }

    #[test]
    fn test_failure_returns_to_editing() {
        let mut page = ProfilePage::new(user(true));

        page.open_editor().unwrap();
        page.begin_submit().unwrap();
        page.submit_failed().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Failed);

        page.resume_editing().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Editing);
    }

    #[test]
    fn test_cancel_editing() {
        let mut page = ProfilePage::new(user(true));
        page.open_editor().unwrap();
        page.close_editor().unwrap();
        assert_eq!(page.sidebar(), SidebarState::Idle);
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let mut page = ProfilePage::new(user(true));

        // Cannot submit a closed sidebar
        let err = page.begin_submit().unwrap_err();
        assert_eq!(err.from, SidebarState::Idle);

        // Cannot open an already-open editor
        page.open_editor().unwrap();
        assert!(page.open_editor().is_err());

        // Cannot resolve a submission that never started
        assert!(page.submit_succeeded().is_err());
        assert!(page.submit_failed().is_err());
    }
}
