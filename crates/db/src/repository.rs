//! Generic predicate-driven repository.

use std::marker::PhantomData;

use collegium_core::error::CoreError;
use collegium_core::types::DbId;

use crate::store::{Entity, EntityStore, Predicate};

/// Uniform CRUD plus predicate query over one entity kind.
///
/// Stateless apart from the injected store handle, so one instance is safe
/// to share across concurrent units of work. Callers supply well-formed,
/// store-evaluable predicates; the repository does not inspect them.
pub struct Repository<T, S> {
    store: S,
    _marker: PhantomData<T>,
}

impl<T, S> Repository<T, S>
where
    T: Entity,
    S: EntityStore<T>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Every committed record, eagerly loading the named relations.
    /// Zero records yields an empty vec, not an error.
    pub async fn get_all(&self, include: &[&str]) -> Result<Vec<T>, CoreError> {
        Ok(self.store.find_all(include).await?)
    }

    /// The first record matching `predicate`, if any. With multiple
    /// matches, which one comes back is store-defined.
    pub async fn get(&self, predicate: Predicate<'_, T>) -> Result<Option<T>, CoreError> {
        Ok(self.store.find_first(predicate).await?)
    }

    /// True iff at least one record matches. Zero matches is not an error.
    pub async fn exists(&self, predicate: Predicate<'_, T>) -> Result<bool, CoreError> {
        Ok(self.store.any(predicate).await?)
    }

    /// Persist a new record, returning it with its store-assigned id.
    pub async fn create(&self, record: T) -> Result<T, CoreError> {
        let created = self.store.add(record).await?;
        self.store.commit().await?;
        tracing::debug!(entity = T::NAME, id = created.id(), "record created");
        Ok(created)
    }

    /// Full-field replacement of an existing record, addressed by its id.
    pub async fn update(&self, record: T) -> Result<T, CoreError> {
        let id = record.id();
        if !self.store.any(&|r: &T| r.id() == id).await? {
            return Err(CoreError::NotFound {
                entity: T::NAME,
                id,
            });
        }
        let updated = self.store.add(record).await?;
        self.store.commit().await?;
        tracing::debug!(entity = T::NAME, id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id`; `NotFound` when no such record exists.
    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let existing = self
            .store
            .find_first(&|r: &T| r.id() == id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: T::NAME,
                id,
            })?;
        self.store.remove(&existing).await?;
        self.store.commit().await?;
        tracing::debug!(entity = T::NAME, id, "record deleted");
        Ok(true)
    }
}
