//! Student operations.

use collegium_core::error::CoreError;
use collegium_core::types::DbId;
use collegium_core::validation::ValidateFields;
use collegium_db::mapper::StudentMapper;
use collegium_db::models::student::{Student, StudentDto};
use collegium_db::patch::PatchOp;
use collegium_db::repository::Repository;
use collegium_db::store::{Entity, EntityStore};

/// Relation name understood by student stores.
const DEPARTMENT_RELATION: &str = "department";

/// CRUD and patch-merge over students, generic over the store adapter.
pub struct StudentService<S> {
    repo: Repository<Student, S>,
}

impl<S: EntityStore<Student>> StudentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// All students as wire records. `include_department` eagerly loads
    /// the relation so `department_name` is populated.
    pub async fn list(&self, include_department: bool) -> Result<Vec<StudentDto>, CoreError> {
        let include: &[&str] = if include_department {
            &[DEPARTMENT_RELATION]
        } else {
            &[]
        };
        let students = self.repo.get_all(include).await?;
        Ok(students.iter().map(StudentMapper::to_dto).collect())
    }

    pub async fn get(&self, id: DbId) -> Result<StudentDto, CoreError> {
        let student = self
            .repo
            .get(&|s: &Student| s.id == id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Student::NAME,
                id,
            })?;
        Ok(StudentMapper::to_dto(&student))
    }

    /// First student with the given name, if any.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<StudentDto>, CoreError> {
        let student = self.repo.get(&|s: &Student| s.name == name).await?;
        Ok(student.as_ref().map(StudentMapper::to_dto))
    }

    /// Create a student: field validation, then the email conflict check,
    /// then persist. The store assigns the identifier.
    pub async fn create(&self, dto: &StudentDto) -> Result<StudentDto, CoreError> {
        let violations = dto.validate_fields();
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }
        if self.repo.exists(&|s: &Student| s.email == dto.email).await? {
            tracing::warn!(email = %dto.email, "duplicate student email rejected");
            return Err(CoreError::Conflict(
                "A student with this email already exists".to_string(),
            ));
        }
        let mut record = StudentMapper::to_entity(dto);
        record.set_id(0);
        let created = self.repo.create(record).await?;
        Ok(StudentMapper::to_dto(&created))
    }

    /// Full update, addressed by the incoming record's identifier.
    pub async fn update(&self, dto: &StudentDto) -> Result<StudentDto, CoreError> {
        let violations = dto.validate_fields();
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }
        let id = dto.id;
        let mut existing = self
            .repo
            .get(&|s: &Student| s.id == id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Student::NAME,
                id,
            })?;
        StudentMapper::merge_into(dto, &mut existing);
        let updated = self.repo.update(existing).await?;
        Ok(StudentMapper::to_dto(&updated))
    }

    /// Partial update: load, project to the wire shape, apply the
    /// operations in order, re-validate the fully merged result, then
    /// push it back through the mapper. An invalid result discards the
    /// merge with nothing staged against the store.
    pub async fn patch(&self, id: DbId, ops: &[PatchOp]) -> Result<StudentDto, CoreError> {
        let mut existing = self
            .repo
            .get(&|s: &Student| s.id == id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Student::NAME,
                id,
            })?;
        let mut dto = StudentMapper::to_dto(&existing);
        for op in ops {
            op.apply(&mut dto)
                .map_err(|violation| CoreError::Validation(vec![violation]))?;
        }
        let violations = dto.validate_fields();
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }
        StudentMapper::merge_into(&dto, &mut existing);
        let updated = self.repo.update(existing).await?;
        Ok(StudentMapper::to_dto(&updated))
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
