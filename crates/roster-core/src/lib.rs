//! Service layer of the roster service.
//!
//! Sits between the HTTP surface and the `PostgreSQL` data layer:
//!
//! - [`service`] -- the facade: `GetRoster`, `InsertPlayer`, `UpdatePlayer`,
//!   `SwapPlayers`, and readiness, each bounded by a request deadline
//! - [`repository`] -- the storage seam and its `PostgreSQL` implementation
//! - [`config`] -- YAML configuration with environment overrides
//! - [`error`] -- the outcome taxonomy returned by the facade
//! - `memory` -- an in-memory repository (feature `test-util`)

pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod repository;
pub mod service;

pub use config::{ConfigError, LogFormat, RosterConfig};
pub use error::ServiceError;
#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use repository::{PgRepository, RosterRepository};
pub use roster_db::{DbError, PostgresPool};
pub use service::RosterService;
