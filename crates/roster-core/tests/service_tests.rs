//! Behavioral tests for the roster service facade.
//!
//! Runs the facade over the in-memory repository, which implements the
//! same compare-and-swap semantics as the `PostgreSQL` stores.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::missing_panics_doc
)]

use std::sync::Arc;
use std::time::Duration;

use roster_core::{MemoryStore, RosterService, ServiceError};
use roster_types::{
    NewPlayer, Player, PlayerChange, PlayerId, PlayerPatch, PlayerStatus, RosterId,
};

const FOO: RosterId = RosterId(382_574_876_546_039_808);

fn player(id: u64, roster: RosterId, first: &str, last: &str, alias: &str, status: PlayerStatus) -> Player {
    Player {
        player_id: PlayerId(id),
        roster_id: roster,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        alias: alias.to_owned(),
        status,
    }
}

/// The "foo" roster: five active players and Oliver on the bench.
fn fixture_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.add_roster_with_id(FOO, "foo");
    for p in [
        player(182_919_996_442_279_937, FOO, "Dominic", "Luklowski", "DataSlayer9", PlayerStatus::Active),
        player(337_332_768_876_789_763, FOO, "Jane", "Beddingfield", "__Jain", PlayerStatus::Active),
        player(444_322_878_230_495_243, FOO, "Phillip", "Aaronivic", "phikic", PlayerStatus::Active),
        player(602_403_447_886_839_809, FOO, "Ji", "Bhok", "TARG3T", PlayerStatus::Active),
        player(622_318_474_387_128_331, FOO, "Damian", "Grey", "Klikx", PlayerStatus::Active),
        player(184_315_303_323_238_400, FOO, "Oliver", "Fieldbutter", "Smaayo", PlayerStatus::Benched),
    ] {
        store.seed_player(p);
    }
    store
}

fn service(store: MemoryStore) -> (RosterService, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let svc = RosterService::new(store.clone(), Duration::from_secs(2));
    (svc, store)
}

fn change(active: u64, benched: u64) -> PlayerChange {
    let mut change = PlayerChange::default();
    change.active.player_id = PlayerId(active);
    change.benched.player_id = PlayerId(benched);
    change
}

// =============================================================================
// GetRoster
// =============================================================================

#[tokio::test]
async fn fixture_roster_reads_back_five_active_one_benched() {
    let (svc, _) = service(fixture_store());
    let roster = svc.get_roster(FOO).await.unwrap();

    assert_eq!(roster.roster_id, FOO);
    assert_eq!(roster.name, "foo");
    assert_eq!(roster.players.active.len(), 5);
    assert_eq!(roster.players.benched.len(), 1);
    assert_eq!(roster.players.active[0].alias, "DataSlayer9");
    assert_eq!(roster.players.active[4].alias, "Klikx");
    assert_eq!(roster.players.benched[0].first_name, "Oliver");
}

#[tokio::test]
async fn partition_is_exact() {
    let (svc, _) = service(fixture_store());
    let roster = svc.get_roster(FOO).await.unwrap();

    for status in [PlayerStatus::Active, PlayerStatus::Benched] {
        assert!(
            roster
                .players
                .with_status(status)
                .iter()
                .all(|p| p.status == status && p.roster_id == FOO)
        );
    }
    assert_eq!(roster.players.len(), 6);
}

#[tokio::test]
async fn unknown_roster_is_empty_not_an_error() {
    let (svc, _) = service(fixture_store());
    let roster = svc.get_roster(RosterId(1)).await.unwrap();
    assert_eq!(roster.roster_id, RosterId(1));
    assert!(roster.name.is_empty());
    assert!(roster.players.is_empty());
}

// =============================================================================
// InsertPlayer / UpdatePlayer
// =============================================================================

#[tokio::test]
async fn inserted_players_start_benched() {
    let (svc, _) = service(fixture_store());
    let inserted = svc
        .insert_player(NewPlayer {
            roster_id: FOO,
            first_name: "New".to_owned(),
            last_name: "Comer".to_owned(),
            alias: "rookie".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(inserted.status, PlayerStatus::Benched);
    assert!(!inserted.player_id.is_unset());

    let roster = svc.get_roster(FOO).await.unwrap();
    assert_eq!(roster.players.benched.len(), 2);
    assert_eq!(roster.players.benched[1].alias, "rookie");
}

#[tokio::test]
async fn insert_into_missing_roster_is_a_store_error() {
    let (svc, _) = service(fixture_store());
    let err = svc
        .insert_player(NewPlayer {
            roster_id: RosterId(77),
            first_name: "No".to_owned(),
            last_name: "Where".to_owned(),
            alias: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
}

#[tokio::test]
async fn roster_move_keeps_names_and_benches() {
    let (svc, store) = service(fixture_store());
    let other = store.add_roster("bar");
    let dominic = PlayerId(182_919_996_442_279_937);

    let mut patch = PlayerPatch::new(dominic);
    patch.roster_id = Some(other);
    let moved = svc.update_player(patch).await.unwrap();

    assert_eq!(moved.roster_id, other);
    assert_eq!(moved.first_name, "Dominic");
    assert_eq!(moved.last_name, "Luklowski");
    assert_eq!(moved.alias, "DataSlayer9");
    assert_eq!(moved.status, PlayerStatus::Benched);
}

#[tokio::test]
async fn zero_values_leave_fields_unchanged() {
    let (svc, _) = service(fixture_store());
    let oliver = PlayerId(184_315_303_323_238_400);

    let patch = PlayerPatch {
        player_id: oliver,
        roster_id: Some(RosterId(0)),
        first_name: Some(String::new()),
        last_name: Some("Fieldbutter-Smith".to_owned()),
        alias: Some(String::new()),
        status: None,
    };
    let updated = svc.update_player(patch).await.unwrap();

    assert_eq!(updated.roster_id, FOO);
    assert_eq!(updated.first_name, "Oliver");
    assert_eq!(updated.last_name, "Fieldbutter-Smith");
    assert_eq!(updated.alias, "Smaayo");
}

#[tokio::test]
async fn update_of_missing_player_is_not_found() {
    let (svc, _) = service(fixture_store());
    let mut patch = PlayerPatch::new(PlayerId(404));
    patch.alias = Some("nobody".to_owned());
    let err = svc.update_player(patch).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

// =============================================================================
// SwapPlayers
// =============================================================================

#[tokio::test]
async fn swap_exchanges_active_and_benched() {
    let store = MemoryStore::new();
    store.add_roster_with_id(RosterId(1), "one");
    store.seed_player(player(1, RosterId(1), "A", "A", "a", PlayerStatus::Active));
    store.seed_player(player(2, RosterId(1), "B", "B", "b", PlayerStatus::Benched));
    let (svc, store) = service(store);

    let result = svc.swap_players(change(1, 2)).await.unwrap();

    assert_eq!(result.active.player_id, PlayerId(2));
    assert_eq!(result.active.status, PlayerStatus::Active);
    assert_eq!(result.active.roster_id, RosterId(1));
    assert_eq!(result.benched.player_id, PlayerId(1));
    assert_eq!(result.benched.status, PlayerStatus::Benched);
    assert_eq!(result.benched.roster_id, RosterId(1));

    assert_eq!(store.player(PlayerId(1)).unwrap().status, PlayerStatus::Benched);
    assert_eq!(store.player(PlayerId(2)).unwrap().status, PlayerStatus::Active);
}

#[tokio::test]
async fn fixture_swap_puts_oliver_in() {
    let (svc, _) = service(fixture_store());
    let dominic = 182_919_996_442_279_937;
    let oliver = 184_315_303_323_238_400;

    let result = svc.swap_players(change(dominic, oliver)).await.unwrap();
    assert_eq!(result.active.first_name, "Oliver");
    assert_eq!(result.benched.first_name, "Dominic");

    let roster = svc.get_roster(FOO).await.unwrap();
    assert_eq!(roster.players.active.len(), 5);
    assert_eq!(roster.players.benched.len(), 1);
    assert_eq!(roster.players.benched[0].first_name, "Dominic");
}

#[tokio::test]
async fn swap_with_wrong_prior_status_changes_nothing() {
    let (svc, store) = service(fixture_store());
    let dominic = 182_919_996_442_279_937;
    let jane = 337_332_768_876_789_763;

    // Both active: the one to activate is not benched.
    let err = svc.swap_players(change(dominic, jane)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Consistency(_)));

    assert_eq!(store.player(PlayerId(dominic)).unwrap().status, PlayerStatus::Active);
    assert_eq!(store.player(PlayerId(jane)).unwrap().status, PlayerStatus::Active);
}

#[tokio::test]
async fn swap_across_rosters_is_rejected() {
    let store = MemoryStore::new();
    store.add_roster_with_id(RosterId(1), "one");
    store.add_roster_with_id(RosterId(2), "two");
    store.seed_player(player(1, RosterId(1), "A", "A", "a", PlayerStatus::Active));
    store.seed_player(player(2, RosterId(2), "B", "B", "b", PlayerStatus::Benched));
    let (svc, store) = service(store);

    let err = svc.swap_players(change(1, 2)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Consistency(_)));

    assert_eq!(store.player(PlayerId(1)).unwrap().status, PlayerStatus::Active);
    assert_eq!(store.player(PlayerId(2)).unwrap().status, PlayerStatus::Benched);
}

#[tokio::test]
async fn swap_with_missing_player_is_rejected() {
    let (svc, _) = service(fixture_store());
    let err = svc
        .swap_players(change(404, 184_315_303_323_238_400))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Consistency(_)));
}

#[tokio::test]
async fn concurrent_swaps_on_one_bench_player_have_one_winner() {
    let (svc, _) = service(fixture_store());
    let oliver = 184_315_303_323_238_400;
    let starters = [
        182_919_996_442_279_937,
        337_332_768_876_789_763,
        444_322_878_230_495_243,
        602_403_447_886_839_809,
        622_318_474_387_128_331,
    ];

    let mut handles = Vec::new();
    for starter in starters {
        let svc = svc.clone();
        handles.push(tokio::spawn(async move {
            svc.swap_players(change(starter, oliver)).await
        }));
    }

    let mut wins = 0_usize;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => wins = wins.saturating_add(1),
            Err(err) => assert!(matches!(err, ServiceError::Consistency(_))),
        }
    }
    assert_eq!(wins, 1);

    let roster = svc.get_roster(FOO).await.unwrap();
    assert_eq!(roster.players.active.len(), 5);
    assert_eq!(roster.players.benched.len(), 1);
}

// =============================================================================
// Deadlines
// =============================================================================

#[tokio::test(start_paused = true)]
async fn slow_store_times_out() {
    let store = Arc::new(fixture_store().with_delay(Duration::from_secs(5)));
    let svc = RosterService::new(store.clone(), Duration::from_millis(100));

    let err = svc.get_roster(FOO).await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout(d) if d == Duration::from_millis(100)));

    let err = svc.ready().await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout(_)));
}

#[tokio::test(start_paused = true)]
async fn timed_out_swap_changes_nothing() {
    let store = Arc::new(fixture_store().with_delay(Duration::from_secs(5)));
    let svc = RosterService::new(store.clone(), Duration::from_millis(100));
    let dominic = 182_919_996_442_279_937;
    let oliver = 184_315_303_323_238_400;

    let err = svc.swap_players(change(dominic, oliver)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout(_)));
    assert_eq!(store.player(PlayerId(oliver)).unwrap().status, PlayerStatus::Benched);
    assert_eq!(store.player(PlayerId(dominic)).unwrap().status, PlayerStatus::Active);
}
