//! Routes for creating, picking from, and loading drafts.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::{
    Json, Router,
    routing::{get, post},
};
use drafter_core::error::DomainError;
use drafter_core::id::DraftId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use drafter_draft::application::command_handlers;
use drafter_draft::application::query_handlers::{self, DraftView};
use drafter_draft::domain::aggregates::DraftSetup;
use drafter_draft::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /create.
///
/// Fields are optional so that a missing field is reported as a 400 with a
/// message naming it, rather than as a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    /// Drafter names in turn order.
    pub drafters: Option<Vec<String>>,
    /// Options available to pick.
    pub options: Option<Vec<String>>,
    /// Number of rounds; must be a non-negative whole number.
    pub rounds: Option<Value>,
}

/// Request body for POST /pick.
#[derive(Debug, Deserialize)]
pub struct PickRequest {
    /// The draft to pick from.
    pub id: Option<Value>,
    /// The name of the drafter submitting the pick.
    pub picker: Option<String>,
    /// The option to take.
    pub pick: Option<String>,
}

/// Query string for GET /load.
#[derive(Debug, Deserialize)]
pub struct LoadQuery {
    /// The draft to load.
    pub id: Option<String>,
}

/// Response body carrying a draft.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    /// Current state of the draft.
    pub draft: DraftView,
}

fn missing(field: &str) -> DomainError {
    DomainError::InvalidInput(format!("missing '{field}' parameter"))
}

fn invalid(field: &str) -> DomainError {
    DomainError::InvalidInput(format!("invalid '{field}' parameter"))
}

/// Reads a numeric field as a non-negative whole number.
///
/// Absent and non-numeric values are reported as missing. Numbers that are
/// negative, fractional or too large are reported as invalid. Integral
/// floats such as `3.0` are accepted.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn whole_number(value: Option<&Value>, field: &str) -> Result<u64, DomainError> {
    let value = value.filter(|v| v.is_number()).ok_or_else(|| missing(field))?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n < u64::MAX as f64)
        .map(|n| n as u64)
        .ok_or_else(|| invalid(field))
}

/// Requires a list field holding at least two entries.
fn at_least_two(value: Option<Vec<String>>, field: &str) -> Result<Vec<String>, DomainError> {
    value.filter(|v| v.len() >= 2).ok_or_else(|| missing(field))
}

/// POST /create
#[instrument(skip(state, payload))]
async fn create_draft(
    State(state): State<AppState>,
    payload: Result<Json<CreateDraftRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, ApiError> {
    let Json(request) = payload?;

    let drafters = at_least_two(request.drafters, "drafters")?;
    let options = at_least_two(request.options, "options")?;
    let rounds = whole_number(request.rounds.as_ref(), "rounds")?;
    let rounds = u32::try_from(rounds).map_err(|_| invalid("rounds"))?;

    let command = commands::CreateDraft {
        correlation_id: Uuid::new_v4(),
        setup: DraftSetup::new(drafters, options, rounds)?,
    };

    info!(correlation_id = %command.correlation_id, "handling create_draft command");

    let draft =
        command_handlers::handle_create_draft(&command, &*state.draft_repository).await?;

    Ok(Json(DraftResponse { draft }))
}

/// POST /pick
#[instrument(skip(state, payload))]
async fn pick_option(
    State(state): State<AppState>,
    payload: Result<Json<PickRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, ApiError> {
    let Json(request) = payload?;

    let draft_id = DraftId(whole_number(request.id.as_ref(), "id")?);

    // An absent pick is passed on as empty so that an unknown draft is
    // reported before a missing pick.
    let command = commands::PickOption {
        correlation_id: Uuid::new_v4(),
        draft_id,
        picker: request.picker,
        pick: request.pick.unwrap_or_default(),
    };

    info!(
        correlation_id = %command.correlation_id,
        draft_id = %draft_id,
        "handling pick_option command"
    );

    let draft = command_handlers::handle_pick_option(
        &command,
        state.turn_policy,
        &*state.draft_repository,
    )
    .await?;

    Ok(Json(DraftResponse { draft }))
}

/// GET /load
#[instrument(skip(state, query))]
async fn load_draft(
    State(state): State<AppState>,
    query: Result<Query<LoadQuery>, QueryRejection>,
) -> Result<Json<DraftResponse>, ApiError> {
    let Query(query) = query?;

    let draft_id = query
        .id
        .as_deref()
        .and_then(|raw| raw.parse::<DraftId>().ok())
        .ok_or_else(|| missing("id"))?;

    let draft = query_handlers::get_draft_by_id(draft_id, &*state.draft_repository).await?;

    Ok(Json(DraftResponse { draft }))
}

/// Returns the router for the draft endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_draft))
        .route("/pick", post(pick_option))
        .route("/load", get(load_draft))
}
