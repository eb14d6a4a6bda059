use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Field-level constraint violations on a wire record. Detected before
    /// any store mutation is staged.
    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// A logical uniqueness constraint would be violated by the requested
    /// write. Checked only after field validation passes.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The entity store itself failed. Not recoverable by the caller; the
    /// underlying message is kept for diagnostics only.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}
