//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors and adds the domain outcomes the stores detect
//! themselves: a missing player, a rejected swap, or a row that violates
//! the status invariant.

use roster_types::{PlayerId, RosterId, UnknownStatus};

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No player row has the given id.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    /// A write referenced a roster that does not exist.
    #[error("roster {0} does not exist")]
    UnknownRoster(RosterId),

    /// A conditional swap update matched zero rows.
    ///
    /// Either the player to activate was not benched, the player to bench
    /// was not active, one of them does not exist, or they belong to
    /// different rosters. The transaction has been rolled back.
    #[error("swap rejected: player {activate} must be benched and player {bench} active in the same roster")]
    SwapRejected {
        /// The player that was to become active.
        activate: PlayerId,
        /// The player that was to become benched.
        bench: PlayerId,
    },

    /// A stored status value is outside the closed set.
    #[error("invalid stored status: {0}")]
    InvalidStatus(#[from] UnknownStatus),

    /// A stored id is negative and cannot be exposed as an unsigned id.
    #[error("stored id {0} is negative")]
    NegativeId(i64),
}
