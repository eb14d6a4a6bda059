//! Department entity model.

use collegium_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A persisted department record, referenced by zero or more students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

impl Entity for Department {
    const NAME: &'static str = "Department";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }
}
