//! Swap Engine: atomic active/benched exchange as a compare-and-swap.
//!
//! A swap runs two conditional updates inside one transaction:
//!
//! 1. Activate the first player, only if it is currently benched. The
//!    statement returns the player's roster.
//! 2. Bench the second player, only if it is currently active and in the
//!    roster observed by step 1.
//!
//! If either statement matches zero rows the transaction is rolled back
//! and [`DbError::SwapRejected`] is returned. Row locks taken by step 1
//! serialize concurrent swaps on the same player, and the loser re-checks
//! the `status` predicate after the winner commits, so at most one of two
//! racing swaps on a shared player can succeed.

use roster_types::{Player, PlayerChange, PlayerId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::rows::{PlayerRow, to_db_id};

/// Executes status swaps between two players of the same roster.
#[derive(Clone)]
pub struct SwapEngine {
    pool: PgPool,
}

impl SwapEngine {
    /// Create a new swap engine on a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Make `activate` active and `bench` benched, atomically.
    ///
    /// Returns the updated records: `active` is the player now active,
    /// `benched` the player now benched. Both updates commit together or
    /// neither does.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::SwapRejected`] if `activate` is not benched,
    /// `bench` is not active, either does not exist, or they are in
    /// different rosters. Returns [`DbError::Postgres`] for any other
    /// database failure.
    pub async fn swap(&self, activate: PlayerId, bench: PlayerId) -> Result<PlayerChange, DbError> {
        // Step 2 would see the row step 1 just activated.
        if activate == bench {
            return Err(DbError::SwapRejected { activate, bench });
        }

        let (Some(activate_id), Some(bench_id)) =
            (to_db_id(activate.into_inner()), to_db_id(bench.into_inner()))
        else {
            return Err(DbError::SwapRejected { activate, bench });
        };

        let mut tx = self.pool.begin().await?;

        match exchange(&mut tx, activate_id, bench_id).await {
            Ok(Some(change)) => {
                tx.commit().await?;
                tracing::info!(
                    activated = %change.active.player_id,
                    benched = %change.benched.player_id,
                    roster_id = %change.active.roster_id,
                    "Swapped players"
                );
                Ok(change)
            }
            Ok(None) => {
                rollback(tx).await;
                tracing::debug!(%activate, %bench, "Swap rejected by status predicate");
                Err(DbError::SwapRejected { activate, bench })
            }
            Err(e) => {
                rollback(tx).await;
                Err(e)
            }
        }
    }
}

/// Run both conditional updates. `None` means a predicate matched no row.
async fn exchange(
    tx: &mut Transaction<'_, Postgres>,
    activate_id: i64,
    bench_id: i64,
) -> Result<Option<PlayerChange>, DbError> {
    let Some(activated) = sqlx::query_as::<_, PlayerRow>(
        r"UPDATE players
          SET status = 'active'
          WHERE id = $1 AND status = 'benched'
          RETURNING id, roster_id, first_name, last_name, alias, status",
    )
    .bind(activate_id)
    .fetch_optional(&mut **tx)
    .await?
    else {
        return Ok(None);
    };

    let Some(benched) = sqlx::query_as::<_, PlayerRow>(
        r"UPDATE players
          SET status = 'benched'
          WHERE id = $1 AND status = 'active' AND roster_id = $2
          RETURNING id, roster_id, first_name, last_name, alias, status",
    )
    .bind(bench_id)
    .bind(activated.roster_id)
    .fetch_optional(&mut **tx)
    .await?
    else {
        return Ok(None);
    };

    Ok(Some(PlayerChange {
        active: Player::try_from(activated)?,
        benched: Player::try_from(benched)?,
    }))
}

/// Roll back explicitly. A rollback failure is logged; the connection is
/// discarded by the pool either way.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "Swap rollback failed");
    }
}
