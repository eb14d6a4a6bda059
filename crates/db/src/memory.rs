//! In-memory entity store adapter.
//!
//! Reference implementation of [`EntityStore`] used by tests and embedding
//! demos; nothing above this module depends on it concretely. A
//! [`MemoryContext`] owns the committed records for every entity kind;
//! each handle stages its own mutations and `commit` applies only that
//! handle's staged set atomically, so reads never observe a half-applied
//! write, a failed commit leaves committed state untouched, and one unit
//! of work never picks up another's staged ops.

use std::sync::Arc;

use async_trait::async_trait;
use collegium_core::types::DbId;
use tokio::sync::{Mutex, RwLock};

use crate::models::department::Department;
use crate::models::student::Student;
use crate::store::{Entity, EntityStore, Predicate, StoreError};

/// Relation name resolved by [`StudentStore::find_all`].
pub const DEPARTMENT_RELATION: &str = "department";

#[derive(Debug, Default)]
struct ContextInner {
    students: Vec<Student>,
    departments: Vec<Department>,
}

#[derive(Debug, Clone)]
enum StagedOp {
    UpsertStudent(Student),
    RemoveStudent(DbId),
    UpsertDepartment(Department),
    RemoveDepartment(DbId),
}

/// Shared in-memory database handle. Cheap to clone; all clones observe
/// the same committed state.
#[derive(Clone, Default)]
pub struct MemoryContext {
    inner: Arc<RwLock<ContextInner>>,
}

impl MemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the student collection. Every call returns a handle with
    /// an empty staged set of its own; clones of one handle share theirs.
    pub fn students(&self) -> StudentStore {
        StudentStore {
            ctx: self.clone(),
            staged: Arc::default(),
        }
    }

    /// Handle for the department collection, with its own staged set.
    pub fn departments(&self) -> DepartmentStore {
        DepartmentStore {
            ctx: self.clone(),
            staged: Arc::default(),
        }
    }

    /// Seed the canonical fixtures (two committed students with ids 1 and 2).
    pub async fn seed_students(&self) {
        let mut inner = self.inner.write().await;
        inner.students = vec![
            Student {
                id: 1,
                name: "John".to_string(),
                email: "john.doe@seznam.cz".to_string(),
                address: "123 Main St, Prague".to_string(),
                department_id: None,
                department: None,
            },
            Student {
                id: 2,
                name: "Jane".to_string(),
                email: "jane.smith@gmail.com".to_string(),
                address: "456 Elm St, Brno".to_string(),
                department_id: None,
                department: None,
            },
        ];
    }

    /// Insert a committed department directly, returning it with its id.
    pub async fn seed_department(&self, name: &str, description: Option<&str>) -> Department {
        let mut inner = self.inner.write().await;
        let id = next_id(inner.departments.iter().map(|d| d.id));
        let department = Department {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        inner.departments.push(department.clone());
        department
    }

    /// Number of committed student records. Test support.
    pub async fn student_count(&self) -> usize {
        self.inner.read().await.students.len()
    }
}

fn next_id(committed: impl Iterator<Item = DbId>) -> DbId {
    committed.max().unwrap_or(0) + 1
}

fn resolve_department(student: &mut Student, departments: &[Department]) {
    student.department = student
        .department_id
        .and_then(|dep_id| departments.iter().find(|d| d.id == dep_id).cloned());
}

/// Apply one handle's staged set to a scratch copy, checking storage-level
/// constraints. Only a fully valid set is swapped into committed state.
fn apply_staged(inner: &mut ContextInner, staged: &[StagedOp]) -> Result<(), StoreError> {
    let mut students = inner.students.clone();
    let mut departments = inner.departments.clone();

    for op in staged {
        match op {
            StagedOp::UpsertStudent(record) => {
                if let Some(dep_id) = record.department_id {
                    if !departments.iter().any(|d| d.id == dep_id) {
                        return Err(StoreError::Constraint(format!(
                            "student {} references missing department {dep_id}",
                            record.id
                        )));
                    }
                }
                match students.iter_mut().find(|s| s.id == record.id) {
                    Some(slot) => *slot = record.clone(),
                    None => students.push(record.clone()),
                }
            }
            StagedOp::RemoveStudent(id) => {
                if !students.iter().any(|s| s.id == *id) {
                    return Err(StoreError::Constraint(format!("no stored student {id}")));
                }
                students.retain(|s| s.id != *id);
            }
            StagedOp::UpsertDepartment(record) => {
                match departments.iter_mut().find(|d| d.id == record.id) {
                    Some(slot) => *slot = record.clone(),
                    None => departments.push(record.clone()),
                }
            }
            StagedOp::RemoveDepartment(id) => {
                if !departments.iter().any(|d| d.id == *id) {
                    return Err(StoreError::Constraint(format!("no stored department {id}")));
                }
                departments.retain(|d| d.id != *id);
            }
        }
    }

    inner.students = students;
    inner.departments = departments;
    Ok(())
}

/// [`EntityStore`] handle over the student collection of a [`MemoryContext`].
#[derive(Clone)]
pub struct StudentStore {
    ctx: MemoryContext,
    staged: Arc<Mutex<Vec<StagedOp>>>,
}

#[async_trait]
impl EntityStore<Student> for StudentStore {
    async fn add(&self, mut record: Student) -> Result<Student, StoreError> {
        let inner = self.ctx.inner.read().await;
        let mut staged = self.staged.lock().await;
        if record.id() == 0 {
            let pending = staged.iter().filter_map(|op| match op {
                StagedOp::UpsertStudent(s) => Some(s.id),
                _ => None,
            });
            record.set_id(next_id(inner.students.iter().map(|s| s.id).chain(pending)));
        }
        // The resolved relation is read-time state, never persisted.
        record.department = None;
        staged.push(StagedOp::UpsertStudent(record.clone()));
        Ok(record)
    }

    async fn remove(&self, record: &Student) -> Result<(), StoreError> {
        let mut staged = self.staged.lock().await;
        staged.push(StagedOp::RemoveStudent(record.id()));
        Ok(())
    }

    async fn find_first(
        &self,
        predicate: Predicate<'_, Student>,
    ) -> Result<Option<Student>, StoreError> {
        let inner = self.ctx.inner.read().await;
        Ok(inner.students.iter().find(|s| predicate(s)).cloned())
    }

    async fn find_all(&self, include: &[&str]) -> Result<Vec<Student>, StoreError> {
        let inner = self.ctx.inner.read().await;
        let mut students = inner.students.clone();
        for relation in include {
            if *relation == DEPARTMENT_RELATION {
                for student in &mut students {
                    resolve_department(student, &inner.departments);
                }
            } else {
                tracing::warn!(relation = *relation, "unknown relation requested, ignoring");
            }
        }
        Ok(students)
    }

    async fn any(&self, predicate: Predicate<'_, Student>) -> Result<bool, StoreError> {
        let inner = self.ctx.inner.read().await;
        Ok(inner.students.iter().any(|s| predicate(s)))
    }

    async fn commit(&self) -> Result<(), StoreError> {
        let mut inner = self.ctx.inner.write().await;
        let mut staged = self.staged.lock().await;
        // The unit of work is over either way; a failed commit discards
        // this handle's staged mutations and leaves committed state untouched.
        let ops = std::mem::take(&mut *staged);
        apply_staged(&mut inner, &ops)
    }
}

/// [`EntityStore`] handle over the department collection of a [`MemoryContext`].
#[derive(Clone)]
pub struct DepartmentStore {
    ctx: MemoryContext,
    staged: Arc<Mutex<Vec<StagedOp>>>,
}

#[async_trait]
impl EntityStore<Department> for DepartmentStore {
    async fn add(&self, mut record: Department) -> Result<Department, StoreError> {
        let inner = self.ctx.inner.read().await;
        let mut staged = self.staged.lock().await;
        if record.id() == 0 {
            let pending = staged.iter().filter_map(|op| match op {
                StagedOp::UpsertDepartment(d) => Some(d.id),
                _ => None,
            });
            record.set_id(next_id(
                inner.departments.iter().map(|d| d.id).chain(pending),
            ));
        }
        staged.push(StagedOp::UpsertDepartment(record.clone()));
        Ok(record)
    }

    async fn remove(&self, record: &Department) -> Result<(), StoreError> {
        let mut staged = self.staged.lock().await;
        staged.push(StagedOp::RemoveDepartment(record.id()));
        Ok(())
    }

    async fn find_first(
        &self,
        predicate: Predicate<'_, Department>,
    ) -> Result<Option<Department>, StoreError> {
        let inner = self.ctx.inner.read().await;
        Ok(inner.departments.iter().find(|d| predicate(d)).cloned())
    }

    async fn find_all(&self, include: &[&str]) -> Result<Vec<Department>, StoreError> {
        let inner = self.ctx.inner.read().await;
        for relation in include {
            tracing::warn!(relation = *relation, "unknown relation requested, ignoring");
        }
        Ok(inner.departments.clone())
    }

    async fn any(&self, predicate: Predicate<'_, Department>) -> Result<bool, StoreError> {
        let inner = self.ctx.inner.read().await;
        Ok(inner.departments.iter().any(|d| predicate(d)))
    }

    async fn commit(&self) -> Result<(), StoreError> {
        let mut inner = self.ctx.inner.write().await;
        let mut staged = self.staged.lock().await;
        let ops = std::mem::take(&mut *staged);
        apply_staged(&mut inner, &ops)
    }
}
