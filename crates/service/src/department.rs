//! Department operations.

use collegium_core::error::CoreError;
use collegium_core::types::DbId;
use collegium_core::validation;
use collegium_db::models::department::Department;
use collegium_db::repository::Repository;
use collegium_db::store::{Entity, EntityStore};

/// CRUD over departments; same generic repository as the student side.
pub struct DepartmentService<S> {
    repo: Repository<Department, S>,
}

impl<S: EntityStore<Department>> DepartmentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    pub async fn list(&self) -> Result<Vec<Department>, CoreError> {
        self.repo.get_all(&[]).await
    }

    pub async fn get(&self, id: DbId) -> Result<Department, CoreError> {
        self.repo
            .get(&|d: &Department| d.id == id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Department::NAME,
                id,
            })
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Department, CoreError> {
        if let Some(violation) = validation::required("name", name) {
            return Err(CoreError::Validation(vec![violation]));
        }
        let record = Department {
            id: 0,
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        self.repo.create(record).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
