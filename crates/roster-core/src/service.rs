//! Service facade: the four roster operations plus readiness.
//!
//! The facade validates input, applies the status rules that belong to
//! the operation (inserts and roster moves land on the bench, only a swap
//! activates), bounds every store call by the request deadline, and maps
//! store outcomes onto [`ServiceError`]. It keeps no state between calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use roster_db::DbError;
use roster_types::{NewPlayer, Player, PlayerChange, PlayerPatch, PlayerStatus, Roster, RosterId};
use validator::Validate;

use crate::error::ServiceError;
use crate::repository::RosterRepository;

/// Entry point for all roster operations.
#[derive(Clone)]
pub struct RosterService {
    repo: Arc<dyn RosterRepository>,
    timeout: Duration,
}

impl RosterService {
    /// Create a service over a repository with a per-call deadline.
    pub const fn new(repo: Arc<dyn RosterRepository>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// Read a roster with its players partitioned by status.
    ///
    /// A roster without players (or one that does not exist) yields empty
    /// partitions, not an error.
    pub async fn get_roster(&self, roster_id: RosterId) -> Result<Roster, ServiceError> {
        self.bounded(self.repo.get_roster(roster_id)).await
    }

    /// Add a player to a roster. The new player is always benched.
    pub async fn insert_player(&self, player: NewPlayer) -> Result<Player, ServiceError> {
        player.validate()?;
        self.bounded(self.repo.insert_player(&player)).await
    }

    /// Apply a sparse update to a player.
    ///
    /// Zero ids and empty strings mean "unchanged". A requested status is
    /// ignored: only a swap can activate a player. Moving a player to a
    /// roster benches it.
    pub async fn update_player(&self, patch: PlayerPatch) -> Result<Player, ServiceError> {
        let mut patch = patch.normalized();
        if patch.status.take().is_some() {
            tracing::debug!(player_id = %patch.player_id, "Ignoring requested status on update");
        }
        if patch.reassigns_roster() {
            patch.status = Some(PlayerStatus::Benched);
        }
        if patch.is_noop() {
            tracing::debug!(player_id = %patch.player_id, "Update changes no fields");
        }

        self.bounded(self.repo.update_player(&patch)).await
    }

    /// Exchange the statuses of two players of one roster.
    ///
    /// `change.active` names the player that is active now and
    /// `change.benched` the player that is benched now; only their ids are
    /// read. The result holds the post-swap records: `active` is the player
    /// just activated and `benched` the player just benched.
    pub async fn swap_players(&self, change: PlayerChange) -> Result<PlayerChange, ServiceError> {
        let bench = change.active.player_id;
        let activate = change.benched.player_id;

        if bench == activate {
            return Err(ServiceError::Validation(format!(
                "cannot swap player {bench} with itself"
            )));
        }

        self.bounded(self.repo.swap_players(activate, bench)).await
    }

    /// Check that the store answers within the deadline.
    pub async fn ready(&self) -> Result<(), ServiceError> {
        self.bounded(self.repo.ping()).await
    }

    /// Run a store call under the deadline. On expiry the call's future is
    /// dropped, which rolls back any transaction it holds open.
    async fn bounded<T, F>(&self, call: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, DbError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_elapsed) => {
                tracing::warn!(timeout_ms = self.timeout.as_millis(), "Store call timed out");
                Err(ServiceError::Timeout(self.timeout))
            }
        }
    }
}
