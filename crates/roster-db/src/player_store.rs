//! Player Record Store: single-statement writes on the `players` table.
//!
//! Inserts always create benched players with a store-generated id.
//! Updates are sparse patches: every `NULL` parameter keeps the stored
//! column value via `COALESCE`, so the whole patch is applied by one
//! statement without a prior read.

use roster_types::{NewPlayer, Player, PlayerId, PlayerPatch, PlayerStatus, RosterId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{PlayerRow, to_db_id};

/// Operations on individual rows of the `players` table.
#[derive(Clone)]
pub struct PlayerStore {
    pool: PgPool,
}

impl PlayerStore {
    /// Create a new player store on a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new player and return the persisted record.
    ///
    /// The id is generated by the store and the status is always
    /// [`PlayerStatus::Benched`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::UnknownRoster`] if `roster_id` references no
    /// roster, or [`DbError::Postgres`] if the insert fails otherwise.
    pub async fn insert(&self, player: &NewPlayer) -> Result<Player, DbError> {
        let roster_id =
            to_db_id(player.roster_id.into_inner()).ok_or(DbError::UnknownRoster(player.roster_id))?;

        let row = sqlx::query_as::<_, PlayerRow>(
            r"INSERT INTO players (roster_id, first_name, last_name, alias, status)
              VALUES ($1, $2, $3, $4, $5)
              RETURNING id, roster_id, first_name, last_name, alias, status",
        )
        .bind(roster_id)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(&player.alias)
        .bind(PlayerStatus::Benched.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, player.roster_id))?;

        let inserted = Player::try_from(row)?;
        tracing::debug!(
            player_id = %inserted.player_id,
            roster_id = %inserted.roster_id,
            "Inserted player"
        );
        Ok(inserted)
    }

    /// Apply a sparse patch and return the fully updated record.
    ///
    /// `None` fields keep their stored value. The patch is applied as
    /// given; zero-value normalization is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::PlayerNotFound`] if no player has the patch's id,
    /// [`DbError::UnknownRoster`] if the new roster does not exist, or
    /// [`DbError::Postgres`] if the update fails otherwise.
    pub async fn update(&self, patch: &PlayerPatch) -> Result<Player, DbError> {
        let player_id =
            to_db_id(patch.player_id.into_inner()).ok_or(DbError::PlayerNotFound(patch.player_id))?;
        let roster_id = patch
            .roster_id
            .map(|id| to_db_id(id.into_inner()).ok_or(DbError::UnknownRoster(id)))
            .transpose()?;

        let row = sqlx::query_as::<_, PlayerRow>(
            r"UPDATE players
              SET
                roster_id  = COALESCE($2, roster_id),
                first_name = COALESCE($3, first_name),
                last_name  = COALESCE($4, last_name),
                alias      = COALESCE($5, alias),
                status     = COALESCE($6, status)
              WHERE id = $1
              RETURNING id, roster_id, first_name, last_name, alias, status",
        )
        .bind(player_id)
        .bind(roster_id)
        .bind(patch.first_name.as_deref())
        .bind(patch.last_name.as_deref())
        .bind(patch.alias.as_deref())
        .bind(patch.status.map(PlayerStatus::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, patch.roster_id.unwrap_or_default()))?
        .ok_or(DbError::PlayerNotFound(patch.player_id))?;

        let updated = Player::try_from(row)?;
        tracing::debug!(
            player_id = %updated.player_id,
            roster_id = %updated.roster_id,
            status = %updated.status,
            "Updated player"
        );
        Ok(updated)
    }

    /// Fetch a single player by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, player_id: PlayerId) -> Result<Option<Player>, DbError> {
        let Some(id) = to_db_id(player_id.into_inner()) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PlayerRow>(
            r"SELECT id, roster_id, first_name, last_name, alias, status
              FROM players
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Player::try_from).transpose()
    }
}

/// Classify a write failure, surfacing foreign-key violations on
/// `roster_id` as [`DbError::UnknownRoster`].
fn map_write_error(err: sqlx::Error, roster_id: RosterId) -> DbError {
    match err {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            DbError::UnknownRoster(roster_id)
        }
        other => DbError::Postgres(other),
    }
}
