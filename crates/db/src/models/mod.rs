//! Domain model structs and DTOs.
//!
//! Each submodule contains a `Serialize` entity struct and, for
//! wire-facing kinds, a DTO carrying the field constraints checked before
//! any persist operation.

pub mod department;
pub mod student;
