//! Entity store adapter boundary.
//!
//! The core never issues raw queries; every persistence interaction goes
//! through [`EntityStore`]. Concrete adapters own all shared mutable state
//! and whatever isolation they provide.

use async_trait::async_trait;
use collegium_core::error::CoreError;
use collegium_core::types::DbId;

/// Minimal contract an entity must satisfy for the generic repository.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity kind name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> DbId;
    fn set_id(&mut self, id: DbId);
}

/// A predicate over one entity, evaluated by the store.
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Errors raised by a store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A storage-level constraint rejected the write, e.g. a dangling
    /// foreign key or a replacement of a record that no longer exists.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The store itself is unavailable or faulted.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Persistence(err.to_string())
    }
}

/// Collection-like interface over persisted records of one entity kind.
///
/// Mutations (`add`, `remove`) are staged; nothing becomes visible to
/// reads until `commit`. A record passed to `add` without an identifier
/// (id zero) is assigned the next one immediately; a record that already
/// carries an identifier is staged as a full replacement of the stored
/// record with that identifier.
///
/// `find_all` eagerly resolves the named relations; implementations log
/// and ignore relation names they do not recognize.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    async fn add(&self, record: T) -> Result<T, StoreError>;
    async fn remove(&self, record: &T) -> Result<(), StoreError>;
    async fn find_first(&self, predicate: Predicate<'_, T>) -> Result<Option<T>, StoreError>;
    async fn find_all(&self, include: &[&str]) -> Result<Vec<T>, StoreError>;
    async fn any(&self, predicate: Predicate<'_, T>) -> Result<bool, StoreError>;
    async fn commit(&self) -> Result<(), StoreError>;
}
