//! Student wire/entity conversion.

use crate::models::student::{Student, StudentDto};

/// Bidirectional converter between [`StudentDto`] and [`Student`].
///
/// Performs no validation; callers validate wire records before mapping.
pub struct StudentMapper;

impl StudentMapper {
    /// Entity from wire record: scalars and foreign key verbatim. The
    /// resolved department is never invented here; relation loading
    /// belongs to the store.
    pub fn to_entity(dto: &StudentDto) -> Student {
        Student {
            id: dto.id,
            name: dto.name.clone(),
            email: dto.email.clone(),
            address: dto.address.clone(),
            department_id: dto.department_id,
            department: None,
        }
    }

    /// Wire record from entity. `department_name` is populated only when
    /// the relation is resolved; the reverse direction never reads it.
    pub fn to_dto(student: &Student) -> StudentDto {
        StudentDto {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            address: student.address.clone(),
            department_id: student.department_id,
            department_name: student.department.as_ref().map(|d| d.name.clone()),
        }
    }

    /// Overwrite `target`'s scalar fields from `dto`, preserving the
    /// target's identifier. The resolved department survives only while
    /// the foreign key is unchanged; a changed key clears it so the store
    /// re-resolves on the next eager load.
    pub fn merge_into(dto: &StudentDto, target: &mut Student) {
        target.name = dto.name.clone();
        target.email = dto.email.clone();
        target.address = dto.address.clone();
        if dto.department_id != target.department_id {
            target.department_id = dto.department_id;
            target.department = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::Department;

    fn physics() -> Department {
        Department {
            id: 7,
            name: "Physics".to_string(),
            description: None,
        }
    }

    fn john_with_department() -> Student {
        Student {
            id: 1,
            name: "John".to_string(),
            email: "john.doe@seznam.cz".to_string(),
            address: "123 Main St, Prague".to_string(),
            department_id: Some(7),
            department: Some(physics()),
        }
    }

    #[test]
    fn to_dto_projects_department_name_when_resolved() {
        let dto = StudentMapper::to_dto(&john_with_department());
        assert_eq!(dto.department_id, Some(7));
        assert_eq!(dto.department_name.as_deref(), Some("Physics"));
    }

    #[test]
    fn to_dto_leaves_name_absent_when_unresolved() {
        let mut student = john_with_department();
        student.department = None;
        let dto = StudentMapper::to_dto(&student);
        assert_eq!(dto.department_id, Some(7));
        assert!(dto.department_name.is_none());
    }

    #[test]
    fn to_entity_never_invents_the_relation() {
        let mut dto = StudentMapper::to_dto(&john_with_department());
        dto.department_name = Some("forged".to_string());
        let entity = StudentMapper::to_entity(&dto);
        assert!(entity.department.is_none());
        assert_eq!(entity.department_id, Some(7));
    }

    #[test]
    fn merge_preserves_id_and_unchanged_association() {
        let mut target = john_with_department();
        let dto = StudentDto {
            id: 999, // incoming ids never overwrite the target's
            name: "Johnny".to_string(),
            email: "johnny@seznam.cz".to_string(),
            address: "New address".to_string(),
            department_id: Some(7),
            department_name: None,
        };
        StudentMapper::merge_into(&dto, &mut target);
        assert_eq!(target.id, 1);
        assert_eq!(target.name, "Johnny");
        assert_eq!(target.department, Some(physics()));
    }

    #[test]
    fn merge_with_new_foreign_key_clears_resolved_relation() {
        let mut target = john_with_department();
        let mut dto = StudentMapper::to_dto(&target);
        dto.department_id = Some(8);
        StudentMapper::merge_into(&dto, &mut target);
        assert_eq!(target.department_id, Some(8));
        assert!(target.department.is_none());
    }

    #[test]
    fn merge_with_cleared_foreign_key_drops_association() {
        let mut target = john_with_department();
        let mut dto = StudentMapper::to_dto(&target);
        dto.department_id = None;
        StudentMapper::merge_into(&dto, &mut target);
        assert_eq!(target.department_id, None);
        assert!(target.department.is_none());
    }
}
