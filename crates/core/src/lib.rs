//! Domain-level building blocks shared by every collegium crate.
//!
//! Pure logic only: no storage access and no transport concerns.

pub mod error;
pub mod response;
pub mod types;
pub mod validation;
