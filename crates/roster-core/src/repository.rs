//! Storage seam between the service facade and the data layer.
//!
//! [`RosterRepository`] is the set of store operations the facade calls.
//! [`PgRepository`] implements it over the `PostgreSQL` stores of
//! `roster-db`; tests plug in the in-memory store instead.

use async_trait::async_trait;
use roster_db::{DbError, PlayerStore, PostgresPool, RosterStore, SwapEngine};
use roster_types::{NewPlayer, Player, PlayerChange, PlayerId, PlayerPatch, Roster, RosterId};

/// Store operations backing the roster service.
///
/// Implementations own whatever coordination they need: the facade holds
/// no state across calls.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Read a roster with its players partitioned by status.
    async fn get_roster(&self, roster_id: RosterId) -> Result<Roster, DbError>;

    /// Persist a new benched player and return the stored record.
    async fn insert_player(&self, player: &NewPlayer) -> Result<Player, DbError>;

    /// Apply a sparse patch and return the updated record.
    async fn update_player(&self, patch: &PlayerPatch) -> Result<Player, DbError>;

    /// Atomically activate `activate` and bench `bench`.
    async fn swap_players(
        &self,
        activate: PlayerId,
        bench: PlayerId,
    ) -> Result<PlayerChange, DbError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), DbError>;
}

/// [`RosterRepository`] backed by `PostgreSQL`.
#[derive(Clone)]
pub struct PgRepository {
    players: PlayerStore,
    rosters: RosterStore,
    swaps: SwapEngine,
}

impl PgRepository {
    /// Build all stores on clones of one pool handle.
    pub fn new(pool: &PostgresPool) -> Self {
        let pool = pool.pool();
        Self {
            players: PlayerStore::new(pool.clone()),
            rosters: RosterStore::new(pool.clone()),
            swaps: SwapEngine::new(pool.clone()),
        }
    }
}

#[async_trait]
impl RosterRepository for PgRepository {
    async fn get_roster(&self, roster_id: RosterId) -> Result<Roster, DbError> {
        self.rosters.get(roster_id).await
    }

    async fn insert_player(&self, player: &NewPlayer) -> Result<Player, DbError> {
        self.players.insert(player).await
    }

    async fn update_player(&self, patch: &PlayerPatch) -> Result<Player, DbError> {
        self.players.update(patch).await
    }

    async fn swap_players(
        &self,
        activate: PlayerId,
        bench: PlayerId,
    ) -> Result<PlayerChange, DbError> {
        self.swaps.swap(activate, bench).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.rosters.ping().await
    }
}
