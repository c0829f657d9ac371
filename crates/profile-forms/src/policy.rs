//! The shared password rule set.
//!
//! Applied identically to the "new" and "repeat" password fields; the
//! current-password field only requires presence. Matches the server-side
//! policy so most violations are caught before a request is made.

use regex_lite::Regex;

use crate::rules::FieldRules;

/// Message shown when a password field is left empty.
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";

/// Message shown when a password violates the policy.
pub const PASSWORD_POLICY_MESSAGE: &str = "The password must contain minimum 8 and maximum 64 \
     characters, with at least one uppercase letter, one lowercase letter, one number and one \
     special character #?!@$%^&*()-";

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// The full shared rule set for a password field.
///
/// The character-class requirements are separate presence patterns rather
/// than a single expression; the regex engine here has no look-ahead.
pub fn password_rules() -> FieldRules {
    FieldRules::required(PASSWORD_REQUIRED_MESSAGE)
        .with_min_length(MIN_PASSWORD_LENGTH, PASSWORD_POLICY_MESSAGE)
        .with_max_length(MAX_PASSWORD_LENGTH, PASSWORD_POLICY_MESSAGE)
        .with_pattern(Regex::new(r"[A-Z]").unwrap(), PASSWORD_POLICY_MESSAGE)
        .with_pattern(Regex::new(r"[a-z]").unwrap(), PASSWORD_POLICY_MESSAGE)
        .with_pattern(Regex::new(r"[0-9]").unwrap(), PASSWORD_POLICY_MESSAGE)
        .with_pattern(
            Regex::new(r"[#?!@$%^&*()\-_+=]").unwrap(),
            PASSWORD_POLICY_MESSAGE,
        )
}

/// Rules for the current-password field: presence only, the server checks
/// the rest.
pub fn current_password_rules() -> FieldRules {
    FieldRules::required(PASSWORD_REQUIRED_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conforming_password() {
        let rules = password_rules();
        assert_eq!(rules.check("NewPass1!"), None);
        assert_eq!(rules.check("Abcdef1#"), None);
    }

    #[test]
    fn test_rejects_empty() {
        let rules = password_rules();
        assert_eq!(rules.check(""), Some(PASSWORD_REQUIRED_MESSAGE.to_string()));
    }

    #[test]
    fn test_rejects_too_short() {
        let rules = password_rules();
        assert_eq!(rules.check("Ab1!"), Some(PASSWORD_POLICY_MESSAGE.to_string()));
    }

    #[test]
    fn test_rejects_too_long() {
        let rules = password_rules();
        let long = format!("Aa1!{}", "x".repeat(64));
        assert_eq!(rules.check(&long), Some(PASSWORD_POLICY_MESSAGE.to_string()));
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        let rules = password_rules();
        // No uppercase
        assert_eq!(
            rules.check("newpass1!"),
            Some(PASSWORD_POLICY_MESSAGE.to_string())
        );
        // No lowercase
        assert_eq!(
            rules.check("NEWPASS1!"),
            Some(PASSWORD_POLICY_MESSAGE.to_string())
        );
        // No digit
        assert_eq!(
            rules.check("NewPassword!"),
            Some(PASSWORD_POLICY_MESSAGE.to_string())
        );
        // No special character
        assert_eq!(
            rules.check("NewPass12"),
            Some(PASSWORD_POLICY_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_accepts_each_listed_special_character() {
        let rules = password_rules();
        for special in "#?!@$%^&*()-_+=".chars() {
            let candidate = format!("NewPass1{special}");
            assert_eq!(rules.check(&candidate), None, "rejected {special:?}");
        }
    }

    #[test]
    fn test_current_password_rules_presence_only() {
        let rules = current_password_rules();
        assert_eq!(rules.check(""), Some(PASSWORD_REQUIRED_MESSAGE.to_string()));
        // Old passwords may predate the policy
        assert_eq!(rules.check("old1"), None);
    }
}
