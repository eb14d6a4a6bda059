//! Student entity model and DTO.

use collegium_core::types::DbId;
use collegium_core::validation::{self, FieldViolation, ValidateFields};
use serde::{Deserialize, Serialize};

use crate::models::department::Department;
use crate::store::Entity;

/// A persisted student record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub department_id: Option<DbId>,
    /// Resolved relation; populated only by eager loading, never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl Entity for Student {
    const NAME: &'static str = "Student";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }
}

/// Wire-facing shape of a student.
///
/// `department_name` is a read-only projection derived from the resolved
/// relation at mapping time; it is never written back to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentDto {
    #[serde(default)]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub department_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl ValidateFields for StudentDto {
    fn validate_fields(&self) -> Vec<FieldViolation> {
        [
            validation::first_violation([
                validation::required("name", &self.name),
                validation::length("name", &self.name, 2, 20),
            ]),
            validation::first_violation([
                validation::required("email", &self.email),
                validation::email("email", &self.email),
            ]),
            validation::first_violation([validation::required("address", &self.address)]),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> StudentDto {
        StudentDto {
            id: 0,
            name: "John".to_string(),
            email: "john.doe@seznam.cz".to_string(),
            address: "123 Main St, Prague".to_string(),
            department_id: None,
            department_name: None,
        }
    }

    #[test]
    fn valid_dto_has_no_violations() {
        assert!(valid_dto().validate_fields().is_empty());
    }

    #[test]
    fn empty_name_reports_required_not_length() {
        let mut dto = valid_dto();
        dto.name.clear();
        let violations = dto.validate_fields();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].rule, "required");
    }

    #[test]
    fn one_character_name_reports_length() {
        let mut dto = valid_dto();
        dto.name = "J".to_string();
        let violations = dto.validate_fields();
        assert_eq!(violations[0].rule, "length");
    }

    #[test]
    fn multiple_invalid_fields_report_one_violation_each() {
        let dto = StudentDto {
            id: 0,
            name: String::new(),
            email: "nope".to_string(),
            address: String::new(),
            department_id: None,
            department_name: None,
        };
        let violations = dto.validate_fields();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "address"]);
    }
}
