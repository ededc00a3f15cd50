//! REST handlers for rosters and players.
//!
//! | Method  | Path                    | Operation                 |
//! |---------|-------------------------|---------------------------|
//! | `GET`   | `/ready`                | readiness probe           |
//! | `GET`   | `/roster/{id}`          | full roster               |
//! | `GET`   | `/roster/{id}/{status}` | one partition             |
//! | `POST`  | `/players/add`          | insert a benched player   |
//! | `PATCH` | `/players/update`       | sparse player update      |
//! | `PATCH` | `/players/change`       | swap active and benched   |
//!
//! Handlers decode the request, call the facade, and serialize the result.
//! Decoding failures become `400`; everything else is mapped by
//! [`ApiError`].

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use roster_types::{NewPlayer, Player, PlayerChange, PlayerPatch, PlayerStatus, RosterId};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a decimal roster id from a path segment.
fn parse_roster_id(raw: &str) -> Result<RosterId, ApiError> {
    raw.parse::<u64>()
        .map(RosterId)
        .ok()
        .ok_or_else(|| ApiError::BadRequest(format!("invalid roster id: {raw:?}")))
}

// ---------------------------------------------------------------------------
// GET /ready
// ---------------------------------------------------------------------------

/// Report readiness once the store answers within the deadline.
pub async fn ready(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    state.service.ready().await?;
    Ok(Json(serde_json::json!({ "status": "ready" })))
}

// ---------------------------------------------------------------------------
// GET /roster/{id}
// ---------------------------------------------------------------------------

/// Return the roster with both partitions.
pub async fn get_roster(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let roster_id = parse_roster_id(&raw_id)?;
    let roster = state.service.get_roster(roster_id).await?;
    Ok(Json(roster))
}

// ---------------------------------------------------------------------------
// GET /roster/{id}/{status}
// ---------------------------------------------------------------------------

/// Return only the active or only the benched players of a roster.
pub async fn get_players(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Path((raw_id, raw_status)) = path?;
    let roster_id = parse_roster_id(&raw_id)?;
    let status = raw_status
        .parse::<PlayerStatus>()
        .ok()
        .ok_or_else(|| ApiError::NotFound(format!("no player status {raw_status:?}")))?;

    let roster = state.service.get_roster(roster_id).await?;
    let players = match status {
        PlayerStatus::Active => roster.players.active,
        PlayerStatus::Benched => roster.players.benched,
    };
    Ok(Json(players))
}

// ---------------------------------------------------------------------------
// POST /players/add
// ---------------------------------------------------------------------------

/// Insert a new player. The response carries the generated id.
pub async fn add_player(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(player) = body?;
    let inserted = state.service.insert_player(player).await?;
    Ok(Json(inserted))
}

// ---------------------------------------------------------------------------
// PATCH /players/update
// ---------------------------------------------------------------------------

/// Apply a sparse update. Zero ids and empty strings leave fields as-is.
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PlayerPatch>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(patch) = body?;
    let updated = state.service.update_player(patch).await?;
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// PATCH /players/change
// ---------------------------------------------------------------------------

/// Swap a currently active player with a currently benched one.
pub async fn change_players(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PlayerChange>, JsonRejection>,
) -> Result<Json<PlayerChange>, ApiError> {
    let Json(change) = body?;
    let swapped = state.service.swap_players(change).await?;
    Ok(Json(swapped))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(String::from("no such route"))
}
