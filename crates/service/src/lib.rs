//! Orchestration layer exposed to the transport boundary.
//!
//! Each service method is one logical unit of work — query, validate,
//! mutate, commit — executed sequentially with no internal parallelism.
//! Methods return `Result<_, CoreError>`; the transport layer wraps the
//! outcome with `ApiResponse::from_result`.

pub mod department;
pub mod student;
