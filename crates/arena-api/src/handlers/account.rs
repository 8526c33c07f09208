//! Account handlers
//!
//! Dashboard, profile updates, and account deletion for the current user.

use axum::{extract::State, Json};
use arena_service::{DashboardResponse, ProfileResponse, UpdateProfileRequest, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Dashboard summary for the current user
///
/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.dashboard(auth.user_id).await?;
    Ok(Json(response))
}

/// Update the current user's profile bio
///
/// POST /profile/edit
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete the current user's account; everything the user owns cascades away
///
/// POST /account/delete
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_account(auth.user_id).await?;
    Ok(NoContent)
}
