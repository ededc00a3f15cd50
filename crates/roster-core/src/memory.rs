//! In-memory [`RosterRepository`] for tests.
//!
//! Mirrors the observable behavior of the `PostgreSQL` stores: generated
//! ids, benched inserts, sparse updates, the roster foreign key, read
//! order equal to insertion order, and the swap compare-and-swap. All
//! state sits behind one mutex, so a swap is trivially atomic.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use roster_db::DbError;
use roster_types::{
    NewPlayer, Player, PlayerChange, PlayerId, PlayerPatch, PlayerStatus, Players, Roster,
    RosterId,
};

use crate::repository::RosterRepository;

#[derive(Debug, Default)]
struct State {
    rosters: Vec<(RosterId, String)>,
    players: Vec<Player>,
    next_roster_id: u64,
    next_player_id: u64,
}

impl State {
    fn roster_name(&self, roster_id: RosterId) -> Option<&str> {
        self.rosters
            .iter()
            .find(|(id, _)| *id == roster_id)
            .map(|(_, name)| name.as_str())
    }

    fn position(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }
}

/// Mutex-guarded store with the same semantics as the database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    delay: Option<Duration>,
    unavailable: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` before every operation.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every operation with a store error.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Create a roster with a generated id.
    pub fn add_roster(&self, name: &str) -> RosterId {
        let mut state = self.lock();
        state.next_roster_id = state.next_roster_id.saturating_add(1);
        let id = RosterId(state.next_roster_id);
        state.rosters.push((id, name.to_owned()));
        id
    }

    /// Create a roster with a fixed id.
    pub fn add_roster_with_id(&self, roster_id: RosterId, name: &str) {
        let mut state = self.lock();
        state.next_roster_id = state.next_roster_id.max(roster_id.into_inner());
        state.rosters.push((roster_id, name.to_owned()));
    }

    /// Store a player exactly as given, including its id and status.
    pub fn seed_player(&self, player: Player) {
        let mut state = self.lock();
        state.next_player_id = state.next_player_id.max(player.player_id.into_inner());
        state.players.push(player);
    }

    /// Look up a player by id.
    pub fn player(&self, player_id: PlayerId) -> Option<Player> {
        self.lock()
            .players
            .iter()
            .find(|p| p.player_id == player_id)
            .cloned()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn enter(&self) -> Result<(), DbError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.unavailable {
            return Err(DbError::Config("memory store marked unavailable".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl RosterRepository for MemoryStore {
    async fn get_roster(&self, roster_id: RosterId) -> Result<Roster, DbError> {
        self.enter().await?;
        let state = self.lock();

        let mut players = Players::default();
        for player in state.players.iter().filter(|p| p.roster_id == roster_id) {
            players.push(player.clone());
        }

        // Same as the join: no players, no name.
        let name = if players.is_empty() {
            String::new()
        } else {
            state.roster_name(roster_id).unwrap_or_default().to_owned()
        };

        Ok(Roster {
            roster_id,
            name,
            players,
        })
    }

    async fn insert_player(&self, player: &NewPlayer) -> Result<Player, DbError> {
        self.enter().await?;
        let mut state = self.lock();

        if state.roster_name(player.roster_id).is_none() {
            return Err(DbError::UnknownRoster(player.roster_id));
        }

        state.next_player_id = state.next_player_id.saturating_add(1);
        let inserted = Player {
            player_id: PlayerId(state.next_player_id),
            roster_id: player.roster_id,
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            alias: player.alias.clone(),
            status: PlayerStatus::Benched,
        };
        state.players.push(inserted.clone());
        Ok(inserted)
    }

    async fn update_player(&self, patch: &PlayerPatch) -> Result<Player, DbError> {
        self.enter().await?;
        let mut state = self.lock();

        // A missing player wins over a missing roster, as in the database.
        if let Some(roster_id) = patch.roster_id {
            if state.roster_name(roster_id).is_none() && state.position(patch.player_id).is_some() {
                return Err(DbError::UnknownRoster(roster_id));
            }
        }

        let player = state
            .players
            .iter_mut()
            .find(|p| p.player_id == patch.player_id)
            .ok_or(DbError::PlayerNotFound(patch.player_id))?;

        if let Some(roster_id) = patch.roster_id {
            player.roster_id = roster_id;
        }
        if let Some(first_name) = &patch.first_name {
            player.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &patch.last_name {
            player.last_name.clone_from(last_name);
        }
        if let Some(alias) = &patch.alias {
            player.alias.clone_from(alias);
        }
        if let Some(status) = patch.status {
            player.status = status;
        }
        Ok(player.clone())
    }

    async fn swap_players(
        &self,
        activate: PlayerId,
        bench: PlayerId,
    ) -> Result<PlayerChange, DbError> {
        self.enter().await?;
        let mut state = self.lock();
        let rejected = DbError::SwapRejected { activate, bench };

        if activate == bench {
            return Err(rejected);
        }

        let Some(up) = state.position(activate) else {
            return Err(rejected);
        };
        let Some(down) = state.position(bench) else {
            return Err(rejected);
        };

        let (Some(to_activate), Some(to_bench)) = (state.players.get(up), state.players.get(down))
        else {
            return Err(rejected);
        };
        if to_activate.status != PlayerStatus::Benched
            || to_bench.status != PlayerStatus::Active
            || to_activate.roster_id != to_bench.roster_id
        {
            return Err(rejected);
        }

        let mut change = PlayerChange {
            active: to_activate.clone(),
            benched: to_bench.clone(),
        };
        change.active.status = change.active.status.flipped();
        change.benched.status = change.benched.status.flipped();

        if let Some(p) = state.players.get_mut(up) {
            p.status = PlayerStatus::Active;
        }
        if let Some(p) = state.players.get_mut(down) {
            p.status = PlayerStatus::Benched;
        }
        Ok(change)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.enter().await
    }
}
