//! Shared type definitions for the roster service.
//!
//! This crate is the single source of truth for the shapes exchanged
//! between the store, the service facade, and the HTTP API. Types flow
//! downstream to `TypeScript` via `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe `u64` wrappers for player and roster identifiers
//! - [`enums`] -- The closed [`PlayerStatus`] set
//! - [`structs`] -- Players, rosters, swap envelopes, and update inputs

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{PlayerStatus, UnknownStatus};
pub use ids::{PlayerId, RosterId};
pub use structs::{NewPlayer, Player, PlayerChange, PlayerPatch, Players, Roster};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PlayerId::export_all();
        let _ = crate::ids::RosterId::export_all();
        let _ = crate::enums::PlayerStatus::export_all();
        let _ = crate::structs::Player::export_all();
        let _ = crate::structs::Players::export_all();
        let _ = crate::structs::Roster::export_all();
        let _ = crate::structs::PlayerChange::export_all();
        let _ = crate::structs::NewPlayer::export_all();
        let _ = crate::structs::PlayerPatch::export_all();
    }
}
