//! Landing page handler

use axum::Json;
use arena_service::HomeResponse;

/// Public landing page
///
/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse::current())
}
