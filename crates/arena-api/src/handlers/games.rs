//! Video game handlers

use axum::{extract::State, Json};
use arena_service::{
    AssignSkillGroupRequest, CreateVideoGameRequest, UpdateVideoGameRequest, VideoGameResponse,
    VideoGameService,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all games
///
/// GET /games
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<VideoGameResponse>>> {
    let service = VideoGameService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// List games created by the current user
///
/// GET /games/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<VideoGameResponse>>> {
    let service = VideoGameService::new(state.service_context());
    Ok(Json(service.list_mine(auth.user_id).await?))
}

/// Create a game
///
/// POST /games/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateVideoGameRequest>,
) -> ApiResult<Created<Json<VideoGameResponse>>> {
    let service = VideoGameService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a game
///
/// POST /games/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(game_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateVideoGameRequest>,
) -> ApiResult<Json<VideoGameResponse>> {
    let service = VideoGameService::new(state.service_context());
    let response = service.update(game_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a game
///
/// POST /games/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(game_id): IdPath,
) -> ApiResult<NoContent> {
    let service = VideoGameService::new(state.service_context());
    service.delete(game_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Set or clear the skill group a game requires
///
/// POST /games/{id}/assign-skillgroup
pub async fn assign_skill_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(game_id): IdPath,
    body: Option<Json<AssignSkillGroupRequest>>,
) -> ApiResult<Json<VideoGameResponse>> {
    let request = body.map(|b| b.0).unwrap_or_default();
    let service = VideoGameService::new(state.service_context());
    let response = service
        .assign_skill_group(game_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}
