//! Per-field validation rules.

use regex_lite::Regex;

/// A pattern the value must match, with the message shown when it doesn't.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub pattern: Regex,
    pub message: String,
}

/// Validation rules for a single form field.
///
/// Rules are checked in order: required, then length, then patterns; the
/// first failing rule's message wins. An empty value is only ever a
/// required-rule failure; length and pattern rules apply to non-empty
/// values.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    required: Option<String>,
    min_length: Option<(usize, String)>,
    max_length: Option<(usize, String)>,
    patterns: Vec<PatternRule>,
}

impl FieldRules {
    /// Rules with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules with only a required constraint.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new().with_required(message)
    }

    /// Mark the field required with the given failure message.
    pub fn with_required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Require at least `min` characters.
    pub fn with_min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_length = Some((min, message.into()));
        self
    }

    /// Require at most `max` characters.
    pub fn with_max_length(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max_length = Some((max, message.into()));
        self
    }

    /// Require the value to match `pattern`.
    pub fn with_pattern(mut self, pattern: Regex, message: impl Into<String>) -> Self {
        self.patterns.push(PatternRule {
            pattern,
            message: message.into(),
        });
        self
    }

    /// Check a value against the rules.
    ///
    /// Returns the first failing rule's message, or `None` when the value
    /// passes.
    pub fn check(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return self.required.clone();
        }

        let length = value.chars().count();
        if let Some((min, message)) = &self.min_length {
            if length < *min {
                return Some(message.clone());
            }
        }
        if let Some((max, message)) = &self.max_length {
            if length > *max {
                return Some(message.clone());
            }
        }

        for rule in &self.patterns {
            if !rule.pattern.is_match(value) {
                return Some(rule.message.clone());
            }
        }

        None
    }
}
