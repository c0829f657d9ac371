//! Mutation status tracking.

use gantry_profile_rest::Error;

/// The tracked status of a single request/response mutation.
///
/// Exactly one mutation can be in flight per owner; the `Pending` state
/// doubles as the in-flight flag that blocks duplicate submissions.
#[derive(Debug, Default)]
pub enum MutationState {
    /// No submission has happened yet (or the last one was cleared).
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last submission succeeded.
    Succeeded,
    /// The last submission failed.
    Failed(Error),
}

impl MutationState {
    /// True before any submission (and after a reset).
    pub fn is_idle(&self) -> bool {
        matches!(self, MutationState::Idle)
    }

    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }

    /// True when the last submission succeeded.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, MutationState::Succeeded)
    }

    /// True when the last submission failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, MutationState::Failed(_))
    }

    /// The failure, when the last submission failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            MutationState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_profile_rest::ErrorKind;

    #[test]
    fn test_default_is_idle() {
        let state = MutationState::default();
        assert!(state.is_idle());
        assert!(!state.is_pending());
        assert!(!state.is_succeeded());
        assert!(!state.is_failed());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_carries_error() {
        let state = MutationState::Failed(Error::new(ErrorKind::Api {
            status: 400,
            message: "Current password does not match".to_string(),
        }));
        assert!(state.is_failed());
        let error = state.error().unwrap();
        assert!(error.is_validation_error());
    }

    #[test]
    fn test_pending_is_exclusive() {
        let state = MutationState::Pending;
        assert!(state.is_pending());
        assert!(!state.is_idle());
        assert!(!state.is_succeeded());
        assert!(!state.is_failed());
    }
}
