//! # profile-forms
//!
//! Form state and validation for the Gantry profile settings surface.
//!
//! This crate owns the client-side half of form handling: per-field rules
//! (required, length, pattern), per-field error messages, combined validity,
//! and reset. It knows nothing about HTTP or rendering; the composition
//! layer (`profile-settings`) wires a [`FormState`] to the API surface.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gantry_profile_forms::{FieldRules, FormState, policy};
//!
//! let mut form = FormState::new()
//!     .with_sensitive_field("password", policy::password_rules());
//!
//! form.set_value("password", "NewPass1!")?;
//! assert!(form.validate());
//! ```

mod form;
pub mod policy;
mod rules;

pub use form::{FormField, FormState, UnknownField};
pub use rules::{FieldRules, PatternRule};
