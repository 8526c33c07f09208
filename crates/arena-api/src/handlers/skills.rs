//! Skill handlers
//!
//! Unlike the other resources, even the full listing requires
//! authentication.

use axum::{extract::State, Json};
use arena_service::{
    CreateSkillRequest, SkillDeletedResponse, SkillResponse, SkillService, UpdateSkillRequest,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all skills, newest first
///
/// GET /skills/all
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// List the current user's skills, newest first
///
/// GET /skills/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    Ok(Json(service.list_mine(auth.user_id).await?))
}

/// Create a skill
///
/// POST /skills/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<Created<Json<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a skill
///
/// POST /skills/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(skill_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSkillRequest>,
) -> ApiResult<Json<SkillResponse>> {
    let service = SkillService::new(state.service_context());
    let response = service.update(skill_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a skill; the response names the deleted skill
///
/// POST /skills/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(skill_id): IdPath,
) -> ApiResult<Json<SkillDeletedResponse>> {
    let service = SkillService::new(state.service_context());
    let response = service.delete(skill_id, auth.user_id).await?;
    Ok(Json(response))
}
