//! Tournament handlers
//!
//! CRUD plus the going / not-going attendance endpoints. The attendance
//! endpoints take an *optional* identity: an anonymous call succeeds
//! without changing anything, matching the original redirect-only
//! behavior, but a missing tournament is still a 404.

use axum::{extract::State, Json};
use arena_core::RsvpStatus;
use arena_service::{
    CreateTournamentRequest, TournamentAttendanceResponse, TournamentResponse, TournamentService,
    UpdateTournamentRequest,
};

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all tournaments with attendance sets
///
/// GET /tournaments
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<TournamentResponse>>> {
    let service = TournamentService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// List tournaments created by the current user
///
/// GET /tournaments/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TournamentResponse>>> {
    let service = TournamentService::new(state.service_context());
    Ok(Json(service.list_mine(auth.user_id).await?))
}

/// Tournament detail
///
/// GET /tournaments/{id}
pub async fn detail(
    State(state): State<AppState>,
    IdPath(tournament_id): IdPath,
) -> ApiResult<Json<TournamentResponse>> {
    let service = TournamentService::new(state.service_context());
    Ok(Json(service.get(tournament_id).await?))
}

/// Create a tournament
///
/// POST /tournaments/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTournamentRequest>,
) -> ApiResult<Created<Json<TournamentResponse>>> {
    let service = TournamentService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a tournament
///
/// POST /tournaments/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(tournament_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateTournamentRequest>,
) -> ApiResult<Json<TournamentResponse>> {
    let service = TournamentService::new(state.service_context());
    let response = service.update(tournament_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a tournament
///
/// POST /tournaments/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(tournament_id): IdPath,
) -> ApiResult<NoContent> {
    let service = TournamentService::new(state.service_context());
    service.delete(tournament_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Toggle the current user's "going" response
///
/// POST /tournaments/{id}/going
pub async fn going(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    IdPath(tournament_id): IdPath,
) -> ApiResult<Json<TournamentAttendanceResponse>> {
    let service = TournamentService::new(state.service_context());
    let response = service
        .toggle_rsvp(tournament_id, auth.map(|a| a.user_id), RsvpStatus::Going)
        .await?;
    Ok(Json(response))
}

/// Toggle the current user's "not going" response
///
/// POST /tournaments/{id}/not-going
pub async fn not_going(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    IdPath(tournament_id): IdPath,
) -> ApiResult<Json<TournamentAttendanceResponse>> {
    let service = TournamentService::new(state.service_context());
    let response = service
        .toggle_rsvp(tournament_id, auth.map(|a| a.user_id), RsvpStatus::NotGoing)
        .await?;
    Ok(Json(response))
}
