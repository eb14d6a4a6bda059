//! Sparse field-level patch operations over the student wire record.
//!
//! Wire shape follows JSON Patch: `{"op":"replace","path":"/name","value":...}`.
//! `add` behaves as `replace` for scalar fields; `remove` (and a `null`
//! value) clears a field to its empty/zero value. Operations apply in
//! order to an in-memory wire record; all-or-nothing semantics come from
//! validating the merged result, not each step.

use collegium_core::types::DbId;
use collegium_core::validation::FieldViolation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::student::StudentDto;

/// One field-level edit in a patch operation set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Replace {
        path: String,
        #[serde(default)]
        value: Value,
    },
    Add {
        path: String,
        #[serde(default)]
        value: Value,
    },
    Remove {
        path: String,
    },
}

impl PatchOp {
    /// Apply this operation to `dto`. Unknown paths, read-only fields,
    /// and un-coercible values are violations naming the offending path.
    pub fn apply(&self, dto: &mut StudentDto) -> Result<(), FieldViolation> {
        match self {
            PatchOp::Replace { path, value } | PatchOp::Add { path, value } => {
                set_field(dto, path, value)
            }
            PatchOp::Remove { path } => set_field(dto, path, &Value::Null),
        }
    }
}

fn field_name(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn set_field(dto: &mut StudentDto, path: &str, value: &Value) -> Result<(), FieldViolation> {
    let field = field_name(path);
    match field {
        "name" => dto.name = string_value("name", value)?,
        "email" => dto.email = string_value("email", value)?,
        "address" => dto.address = string_value("address", value)?,
        "departmentId" | "department_id" => {
            dto.department_id = id_value("department_id", value)?;
        }
        "id" => {
            return Err(FieldViolation::new(
                "id",
                "immutable",
                "id cannot be patched",
            ));
        }
        "departmentName" | "department_name" => {
            return Err(FieldViolation::new(
                "department_name",
                "read_only",
                "department_name is derived and cannot be patched",
            ));
        }
        other => {
            return Err(FieldViolation::new(
                other,
                "unknown_field",
                format!("unknown field: {other}"),
            ));
        }
    }
    Ok(())
}

fn string_value(field: &str, value: &Value) -> Result<String, FieldViolation> {
    match value {
        // Cleared fields are caught by post-merge validation if required.
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        other => Err(FieldViolation::new(
            field,
            "type",
            format!("{field} expects a string, got {other}"),
        )),
    }
}

fn id_value(field: &str, value: &Value) -> Result<Option<DbId>, FieldViolation> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
            FieldViolation::new(field, "type", format!("{field} expects an integer id"))
        }),
        other => Err(FieldViolation::new(
            field,
            "type",
            format!("{field} expects an integer id, got {other}"),
        )),
    }
}
