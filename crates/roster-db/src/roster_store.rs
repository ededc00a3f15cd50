//! Roster Aggregator: one-pass read of a roster and its partitioned players.
//!
//! The roster name and every player come from a single `players ⋈ rosters`
//! join. The partition into active and benched is derived on read and
//! keeps the row order returned by `PostgreSQL` (no explicit sort).
//!
//! A roster with no players yields an empty partition and an empty name,
//! never a not-found error: the join cannot distinguish an empty roster
//! from a missing one.

use roster_types::{Player, Players, Roster, RosterId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{RosterPlayerRow, from_db_id, to_db_id};

/// Read operations over the `rosters` and `players` tables.
#[derive(Clone)]
pub struct RosterStore {
    pool: PgPool,
}

impl RosterStore {
    /// Create a new roster store on a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the roster with all its players, partitioned by status.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidStatus`] if a stored row violates the status
    /// invariant.
    pub async fn get(&self, roster_id: RosterId) -> Result<Roster, DbError> {
        let Some(id) = to_db_id(roster_id.into_inner()) else {
            return assemble_roster(roster_id, Vec::new());
        };

        let rows = sqlx::query_as::<_, RosterPlayerRow>(
            r"SELECT
                rosters.id   AS roster_id,
                rosters.name AS roster_name,
                p.id         AS player_id,
                p.first_name,
                p.last_name,
                p.alias,
                p.status
              FROM players AS p
              INNER JOIN rosters ON p.roster_id = rosters.id
              WHERE p.roster_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let roster = assemble_roster(roster_id, rows)?;
        tracing::debug!(
            roster_id = %roster.roster_id,
            active = roster.players.active.len(),
            benched = roster.players.benched.len(),
            "Read roster"
        );
        Ok(roster)
    }

    /// Check that the database answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Build a [`Roster`] from joined rows, preserving row order per partition.
///
/// The roster id and name come from the rows. With no rows the requested
/// id is kept and the name is empty.
///
/// # Errors
///
/// Returns [`DbError`] if a row carries a negative id or an unknown status.
pub fn assemble_roster(
    requested: RosterId,
    rows: Vec<RosterPlayerRow>,
) -> Result<Roster, DbError> {
    let mut roster = Roster {
        roster_id: requested,
        name: String::new(),
        players: Players::default(),
    };

    if let Some(first) = rows.first() {
        roster.roster_id = RosterId(from_db_id(first.roster_id)?);
        roster.name.clone_from(&first.roster_name);
    }

    for row in rows {
        roster.players.push(Player::try_from(row)?);
    }

    Ok(roster)
}
