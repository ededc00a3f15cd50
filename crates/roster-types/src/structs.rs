//! Core entity structs for players and rosters.
//!
//! These are the only shapes the service reads or writes. The JSON field
//! names are part of the public contract:
//!
//! ```text
//! Player       {player_id, roster_id, first_name, last_name, alias, status}
//! Roster       {roster_id, name, players: {active: [Player], benched: [Player]}}
//! PlayerChange {active: Player, benched: Player}
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::enums::{PlayerStatus, empty_status_as_none};
use crate::ids::{PlayerId, RosterId};

/// A persisted player record.
///
/// Every field defaults when absent from a JSON payload, so request bodies
/// that only carry a `player_id` (as in a swap request) still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Store-generated identity.
    pub player_id: PlayerId,
    /// The roster this player belongs to.
    pub roster_id: RosterId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display handle.
    pub alias: String,
    /// Current lineup status.
    pub status: PlayerStatus,
}

/// The active/benched partition of a roster's players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Players {
    /// Players with [`PlayerStatus::Active`], in read order.
    pub active: Vec<Player>,
    /// Players with [`PlayerStatus::Benched`], in read order.
    pub benched: Vec<Player>,
}

impl Players {
    /// Place a player into the partition matching its status.
    pub fn push(&mut self, player: Player) {
        match player.status {
            PlayerStatus::Active => self.active.push(player),
            PlayerStatus::Benched => self.benched.push(player),
        }
    }

    /// The partition holding players of the given status.
    pub fn with_status(&self, status: PlayerStatus) -> &[Player] {
        match status {
            PlayerStatus::Active => &self.active,
            PlayerStatus::Benched => &self.benched,
        }
    }

    /// Total number of players across both partitions.
    pub fn len(&self) -> usize {
        self.active.len().saturating_add(self.benched.len())
    }

    /// Whether both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.benched.is_empty()
    }
}

/// A roster together with its derived player partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Roster {
    /// Roster identity.
    pub roster_id: RosterId,
    /// Display name. Empty when the roster has no players (see `GetRoster`).
    pub name: String,
    /// Players partitioned by status.
    pub players: Players,
}

/// Two players paired for a status swap.
///
/// As a request, `active` names the player that is currently active and
/// `benched` the player that is currently benched; only their ids are read.
/// As a response, `active` is the player that was just activated and
/// `benched` the player that was just benched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerChange {
    /// The active side of the pair.
    #[serde(default)]
    pub active: Player,
    /// The benched side of the pair.
    #[serde(default)]
    pub benched: Player,
}

/// Input for inserting a new player.
///
/// A `player_id` or `status` in the payload is ignored: the store generates
/// the id and new players always start benched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct NewPlayer {
    /// The roster to join. Must reference an existing roster.
    #[validate(custom(function = "validate_roster_id"))]
    pub roster_id: RosterId,
    /// Given name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Display handle.
    #[validate(length(min = 1))]
    pub alias: String,
}

fn validate_roster_id(roster_id: &RosterId) -> Result<(), ValidationError> {
    if roster_id.is_unset() {
        return Err(ValidationError::new("roster_id_required"));
    }
    Ok(())
}

/// Sparse update of a player identified by `player_id`.
///
/// `None` means "leave unchanged". On the wire the zero values (`0`, `""`)
/// mean the same thing; [`PlayerPatch::normalized`] folds them into `None`.
/// There is no way to set a field back to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerPatch {
    /// The player to update.
    #[serde(default)]
    pub player_id: PlayerId,
    /// Move the player to this roster.
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New display handle.
    #[serde(default)]
    pub alias: Option<String>,
    /// New status.
    #[serde(default, deserialize_with = "empty_status_as_none")]
    pub status: Option<PlayerStatus>,
}

impl PlayerPatch {
    /// Create an empty patch for the given player.
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// Fold zero ids and empty strings into `None`.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.is_empty())
        }

        Self {
            player_id: self.player_id,
            roster_id: self.roster_id.filter(|id| !id.is_unset()),
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            alias: non_empty(self.alias),
            status: self.status,
        }
    }

    /// Whether this patch moves the player to a roster.
    pub const fn reassigns_roster(&self) -> bool {
        self.roster_id.is_some()
    }

    /// Whether applying this patch would change nothing.
    pub const fn is_noop(&self) -> bool {
        self.roster_id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.alias.is_none()
            && self.status.is_none()
    }
}
