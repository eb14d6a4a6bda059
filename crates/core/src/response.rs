//! Uniform success/error envelope around repository-driven outcomes.
//!
//! Transport-agnostic: the status field uses HTTP-shaped numeric codes but
//! the envelope itself carries no headers, routes, or content negotiation.
//! The excluded transport layer translates it one-to-one.

use serde::Serialize;

use crate::error::CoreError;

/// Wrapper returned to the orchestration boundary for every core operation.
///
/// `data` is present only on success; `errors` only on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status: 200,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            success: true,
            status: 201,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            success: true,
            status: 204,
            data: None,
            errors: Vec::new(),
        }
    }

    /// Wrap an operation outcome, mapping errors per [`From<CoreError>`].
    pub fn from_result(result: Result<T, CoreError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::from(err),
        }
    }
}

impl<T> From<CoreError> for ApiResponse<T> {
    fn from(err: CoreError) -> Self {
        let (status, errors) = match &err {
            CoreError::NotFound { .. } => (404, vec![err.to_string()]),
            CoreError::Validation(violations) => (
                400,
                violations
                    .iter()
                    .map(|v| format!("{}: {}", v.field, v.message))
                    .collect(),
            ),
            CoreError::Conflict(msg) => (409, vec![msg.clone()]),
            CoreError::Persistence(detail) => {
                // The low-level detail stays in the logs, never in the envelope.
                tracing::error!(error = %detail, "persistence failure");
                (500, vec!["An internal error occurred".to_string()])
            }
        };
        Self {
            success: false,
            status,
            data: None,
            errors,
        }
    }
}
