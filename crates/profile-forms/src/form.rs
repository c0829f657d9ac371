//! Form state: named fields, values, errors, combined validity.

use tracing::debug;

use crate::rules::FieldRules;

/// Error returned when addressing a field the form does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// A single form field: its value, rules, and current error.
///
/// Sensitive fields are redacted in Debug output.
#[derive(Clone)]
pub struct FormField {
    name: String,
    value: String,
    rules: FieldRules,
    error: Option<String>,
    sensitive: bool,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: &dyn std::fmt::Debug = if self.sensitive {
            &"[REDACTED]"
        } else {
            &self.value
        };
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("value", value)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl FormField {
    fn new(name: String, rules: FieldRules, sensitive: bool) -> Self {
        Self {
            name,
            value: String::new(),
            rules,
            error: None,
            sensitive,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A set of named form fields with per-field validation.
///
/// There is exactly one mutable owner of the form state; validity is
/// re-derived from values on demand rather than cached.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with the given rules.
    pub fn with_field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.push(FormField::new(name.into(), rules, false));
        self
    }

    /// Add a field whose value is redacted in Debug output.
    pub fn with_sensitive_field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.push(FormField::new(name.into(), rules, true));
        self
    }

    /// The fields, in registration order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FormField, UnknownField> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .ok_or_else(|| UnknownField(name.to_string()))
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Set a field's value, clearing any error recorded against it.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = self.field_mut(name)?;
        field.value = value.into();
        field.error = None;
        Ok(())
    }

    /// Get a field's current value.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Get a field's current error message.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|field| field.error.as_deref())
    }

    /// Record an error against a field (e.g. a cross-field check).
    pub fn set_error(
        &mut self,
        name: &str,
        message: impl Into<String>,
    ) -> Result<(), UnknownField> {
        self.field_mut(name)?.error = Some(message.into());
        Ok(())
    }

    /// Combined validity: every field passes its rules.
    ///
    /// Does not touch recorded errors; use [`validate`](Self::validate) to
    /// surface messages.
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|field| field.rules.check(&field.value).is_none())
    }

    /// Validate every field, recording per-field error messages.
    ///
    /// Returns the combined validity.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            field.error = field.rules.check(&field.value);
            valid &= field.error.is_none();
        }
        debug!(valid, "form validated");
        valid
    }

    /// Clear all values and errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}
