//! JSON routes over the shared room.
//!
//! The core's boolean refusals map onto HTTP statuses: a request that the
//! room rejects for an expected reason (no capacity, not found, table not
//! empty) never leaves the room half-mutated.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use openspace_logic::{LonelyMove, Openspace, SeatAssignment};

use crate::SharedRoom;

pub fn router(room: SharedRoom) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", get(plan))
        .route("/stats", get(stats))
        .route("/organize", post(organize))
        .route("/people", post(add_person))
        .route("/people/{name}", delete(remove_person))
        .route("/tables", post(add_table))
        .route("/tables/{index}", delete(remove_table))
        .route("/tables/{index}/people/{name}", delete(remove_from_table))
        .route("/lonely/eliminate", post(eliminate_lonely))
        .with_state(room)
}

// ── Error mapping ──────────────────────────────────────────────────────

enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "room lock poisoned".to_string(),
            ),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// A poisoned lock means a handler panicked mid-mutation; surface it as a
/// server error instead of unwrapping.
fn read(room: &SharedRoom) -> Result<std::sync::RwLockReadGuard<'_, Openspace>, ApiError> {
    room.read().map_err(|_| ApiError::Internal)
}

fn write(room: &SharedRoom) -> Result<std::sync::RwLockWriteGuard<'_, Openspace>, ApiError> {
    room.write().map_err(|_| ApiError::Internal)
}

// ── Payloads ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Stats {
    seats_left: usize,
    total_people: usize,
    table_count: usize,
    lonely: bool,
    unseated: Vec<String>,
}

fn stats_of(room: &Openspace) -> Stats {
    Stats {
        seats_left: room.seats_left(),
        total_people: room.total_people_in_room(),
        table_count: room.table_count(),
        lonely: room.is_there_lonely_person(),
        unseated: room.get_unseated_people(),
    }
}

#[derive(Deserialize)]
struct OrganizeRequest {
    names: Vec<String>,
    /// Optional shuffle seed for a reproducible arrangement.
    seed: Option<u64>,
}

#[derive(Serialize)]
struct OrganizeResponse {
    plan: Vec<SeatAssignment>,
    sat_alone: Vec<String>,
    unassigned: Vec<String>,
    stats: Stats,
}

#[derive(Deserialize)]
struct AddPersonRequest {
    name: String,
}

#[derive(Serialize)]
struct AddPersonResponse {
    seated: bool,
    /// Waiting for company at an empty table; the pending group is seated
    /// by the next organize pass.
    deferred: bool,
}

#[derive(Deserialize)]
struct AddTableRequest {
    capacity: usize,
}

// ── Handlers ───────────────────────────────────────────────────────────

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn plan(State(room): State<SharedRoom>) -> Result<Json<Vec<SeatAssignment>>, ApiError> {
    let room = read(&room)?;
    Ok(Json(room.seating_plan()))
}

async fn stats(State(room): State<SharedRoom>) -> Result<Json<Stats>, ApiError> {
    let room = read(&room)?;
    Ok(Json(stats_of(&room)))
}

async fn organize(
    State(room): State<SharedRoom>,
    Json(request): Json<OrganizeRequest>,
) -> Result<Json<OrganizeResponse>, ApiError> {
    // The roster collaborator contract: trimmed, non-empty names.
    let names: Vec<String> = request
        .names
        .iter()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect();

    let mut rng: StdRng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut room = write(&room)?;
    room.organize(&names, &mut rng);
    tracing::info!(
        "organized {} names, {} unassigned",
        names.len(),
        room.unassigned().len()
    );

    Ok(Json(OrganizeResponse {
        plan: room.seating_plan(),
        sat_alone: room.sat_alone().to_vec(),
        unassigned: room.unassigned().to_vec(),
        stats: stats_of(&room),
    }))
}

async fn add_person(
    State(room): State<SharedRoom>,
    Json(request): Json<AddPersonRequest>,
) -> Result<Json<AddPersonResponse>, ApiError> {
    let name = request.name.trim().to_owned();
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must be non-empty".to_string()));
    }

    let mut room = write(&room)?;
    if room.is_person_seated(&name) {
        return Err(ApiError::Conflict(format!("{name} is already seated")));
    }
    if room.assign_person(&name) {
        return Ok(Json(AddPersonResponse {
            seated: true,
            deferred: false,
        }));
    }
    if room.group_pending().iter().any(|pending| pending == &name) {
        return Ok(Json(AddPersonResponse {
            seated: false,
            deferred: true,
        }));
    }
    Err(ApiError::Conflict(format!("no seat available for {name}")))
}

async fn remove_person(
    State(room): State<SharedRoom>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut room = write(&room)?;
    if room.remove_person_from_room(&name) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("{name} is not in the room")))
    }
}

async fn add_table(
    State(room): State<SharedRoom>,
    Json(request): Json<AddTableRequest>,
) -> Result<Json<Stats>, ApiError> {
    if request.capacity == 0 {
        return Err(ApiError::BadRequest(
            "table capacity must be at least 1".to_string(),
        ));
    }
    let mut room = write(&room)?;
    room.add_table(request.capacity);
    Ok(Json(stats_of(&room)))
}

async fn remove_table(
    State(room): State<SharedRoom>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let mut room = write(&room)?;
    if index == 0 || index > room.table_count() {
        return Err(ApiError::NotFound(format!("no table {index}")));
    }
    if room.remove_table(index) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::Conflict(format!("table {index} is not empty")))
    }
}

async fn remove_from_table(
    State(room): State<SharedRoom>,
    Path((index, name)): Path<(usize, String)>,
) -> Result<StatusCode, ApiError> {
    let mut room = write(&room)?;
    if index == 0 || index > room.table_count() {
        return Err(ApiError::NotFound(format!("no table {index}")));
    }
    if room.remove_person_from_table(index, &name) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "{name} is not seated at table {index}"
        )))
    }
}

async fn eliminate_lonely(
    State(room): State<SharedRoom>,
) -> Result<Json<Vec<LonelyMove>>, ApiError> {
    let mut room = write(&room)?;
    let moves = room.eliminate_lonely_tables();
    tracing::info!("lonely redistribution moved {} people", moves.len());
    Ok(Json(moves))
}
