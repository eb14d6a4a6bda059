//! Data-access layer: entity models, the store adapter boundary, the
//! generic predicate-driven repository, wire-record mapping, and patch
//! operations.
//!
//! Nothing in this crate talks to a concrete storage engine; all access
//! goes through the [`store::EntityStore`] trait. [`memory`] provides the
//! reference in-memory adapter used by tests and embedding demos.

pub mod mapper;
pub mod memory;
pub mod models;
pub mod patch;
pub mod repository;
pub mod store;
