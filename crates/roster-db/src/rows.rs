//! Raw row shapes and their conversion into domain types.
//!
//! `PostgreSQL` stores ids as signed `BIGINT` and the status as `TEXT`.
//! The conversions here are the only place where those representations
//! meet [`PlayerId`], [`RosterId`], and [`PlayerStatus`].

use roster_types::{Player, PlayerId, PlayerStatus, RosterId};

use crate::error::DbError;

/// A row from the `players` table, as returned by `RETURNING`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    /// Player id.
    pub id: i64,
    /// Owning roster id.
    pub roster_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display handle.
    pub alias: String,
    /// Status string (`active` or `benched`).
    pub status: String,
}

impl TryFrom<PlayerRow> for Player {
    type Error = DbError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            player_id: PlayerId(from_db_id(row.id)?),
            roster_id: RosterId(from_db_id(row.roster_id)?),
            first_name: row.first_name,
            last_name: row.last_name,
            alias: row.alias,
            status: row.status.parse::<PlayerStatus>()?,
        })
    }
}

/// A row of the `players ⋈ rosters` join read by the roster aggregator.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RosterPlayerRow {
    /// Roster id.
    pub roster_id: i64,
    /// Roster display name.
    pub roster_name: String,
    /// Player id.
    pub player_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display handle.
    pub alias: String,
    /// Status string (`active` or `benched`).
    pub status: String,
}

impl TryFrom<RosterPlayerRow> for Player {
    type Error = DbError;

    fn try_from(row: RosterPlayerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            player_id: PlayerId(from_db_id(row.player_id)?),
            roster_id: RosterId(from_db_id(row.roster_id)?),
            first_name: row.first_name,
            last_name: row.last_name,
            alias: row.alias,
            status: row.status.parse::<PlayerStatus>()?,
        })
    }
}

/// Convert an unsigned id to its `BIGINT` column value.
///
/// `None` means no row can carry the id; callers answer as if the lookup
/// matched nothing.
pub(crate) fn to_db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Convert a `BIGINT` column value to an unsigned id.
pub(crate) fn from_db_id(id: i64) -> Result<u64, DbError> {
    u64::try_from(id).ok().ok_or(DbError::NegativeId(id))
}
