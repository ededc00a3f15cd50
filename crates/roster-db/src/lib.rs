//! `PostgreSQL` data layer for the roster service.
//!
//! Players belong to exactly one roster and are either active or benched.
//! This crate owns the schema and every statement issued against it.
//!
//! # Architecture
//!
//! ```text
//! RosterService (roster-core)
//!     |
//!     +-- reads ---------> RosterStore   (players ⋈ rosters, partitioned)
//!     |
//!     +-- single writes -> PlayerStore   (insert benched, sparse update)
//!     |
//!     +-- swaps ---------> SwapEngine    (two conditional UPDATEs, one tx)
//!                              |
//!                              v
//!                         PostgresPool (sqlx PgPool, migrations)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- Database settings and the pool opened from them
//! - [`player_store`] -- Player inserts, sparse updates, and lookups
//! - [`roster_store`] -- Roster reads and readiness ping
//! - [`swap`] -- Atomic status exchange between two players
//! - [`rows`] -- Raw row shapes and id/status conversion
//! - [`error`] -- Shared error types

pub mod error;
pub mod player_store;
pub mod postgres;
pub mod roster_store;
pub mod rows;
pub mod swap;

// Re-export primary types for convenience.
pub use error::DbError;
pub use player_store::PlayerStore;
pub use postgres::{DatabaseConfig, PostgresPool};
pub use roster_store::{RosterStore, assemble_roster};
pub use rows::{PlayerRow, RosterPlayerRow};
pub use swap::SwapEngine;
