//! Skill group handlers
//!
//! List and detail are public; every mutation requires authentication and
//! passes the ownership check in the service layer.

use axum::{extract::State, Json};
use arena_service::{
    CreateSkillGroupRequest, SkillGroupDetailResponse, SkillGroupResponse, SkillGroupService,
    UpdateSkillGroupRequest,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all skill groups
///
/// GET /skillgroups
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<SkillGroupResponse>>> {
    let service = SkillGroupService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// List skill groups owned by the current user
///
/// GET /skillgroups/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SkillGroupResponse>>> {
    let service = SkillGroupService::new(state.service_context());
    Ok(Json(service.list_mine(auth.user_id).await?))
}

/// Skill group detail with its skills
///
/// GET /skillgroups/{id}
pub async fn detail(
    State(state): State<AppState>,
    IdPath(group_id): IdPath,
) -> ApiResult<Json<SkillGroupDetailResponse>> {
    let service = SkillGroupService::new(state.service_context());
    Ok(Json(service.get(group_id).await?))
}

/// Create a skill group
///
/// POST /skillgroups/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSkillGroupRequest>,
) -> ApiResult<Created<Json<SkillGroupResponse>>> {
    let service = SkillGroupService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a skill group
///
/// POST /skillgroups/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSkillGroupRequest>,
) -> ApiResult<Json<SkillGroupResponse>> {
    let service = SkillGroupService::new(state.service_context());
    let response = service.update(group_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a skill group
///
/// POST /skillgroups/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath,
) -> ApiResult<NoContent> {
    let service = SkillGroupService::new(state.service_context());
    service.delete(group_id, auth.user_id).await?;
    Ok(NoContent)
}
