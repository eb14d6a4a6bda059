//! Field validation rules for wire records.
//!
//! Pure logic, no storage access. Each helper checks one rule and returns
//! the violation it detects, if any; callers aggregate with
//! [`first_violation`] so only the first failed rule per field is reported.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose email shape: one `@` with a dotted, whitespace-free domain part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Implemented by wire records that carry field constraints.
pub trait ValidateFields {
    /// All field violations, at most one per field (first failure wins).
    fn validate_fields(&self) -> Vec<FieldViolation>;
}

/// The value must be present and non-empty after trimming.
pub fn required(field: &str, value: &str) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        Some(FieldViolation::new(
            field,
            "required",
            format!("{field} is required"),
        ))
    } else {
        None
    }
}

/// The character count must fall within `min..=max`.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Option<FieldViolation> {
    let count = value.chars().count();
    if count < min || count > max {
        Some(FieldViolation::new(
            field,
            "length",
            format!("{field} must be between {min} and {max} characters"),
        ))
    } else {
        None
    }
}

/// The value must look like an email address.
pub fn email(field: &str, value: &str) -> Option<FieldViolation> {
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some(FieldViolation::new(
            field,
            "email",
            format!("{field} must be a valid email address"),
        ))
    }
}

/// Evaluate the rules for one field in order, keeping only the first violation.
pub fn first_violation(
    rules: impl IntoIterator<Item = Option<FieldViolation>>,
) -> Option<FieldViolation> {
    rules.into_iter().flatten().next()
}
