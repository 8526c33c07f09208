//! Route definitions
//!
//! Reads are GETs; mutations are form-style POSTs (create / edit /
//! delete / assign / going), organized by resource.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    account, auth, games, health, home, skill_groups, skills, tournaments,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately so probes bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(auth_routes())
        .merge(account_routes())
        .merge(skill_group_routes())
        .merge(skill_routes())
        .merge(game_routes())
        .merge(tournament_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Registration and session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Current-user routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(account::dashboard))
        .route("/profile/edit", post(account::update_profile))
        .route("/account/delete", post(account::delete_account))
}

/// Skill group routes
fn skill_group_routes() -> Router<AppState> {
    Router::new()
        .route("/skillgroups", get(skill_groups::list))
        .route("/skillgroups/mine", get(skill_groups::list_mine))
        .route("/skillgroups/create", post(skill_groups::create))
        .route("/skillgroups/:id", get(skill_groups::detail))
        .route("/skillgroups/:id/edit", post(skill_groups::update))
        .route("/skillgroups/:id/delete", post(skill_groups::delete))
}

/// Skill routes
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills/all", get(skills::list_all))
        .route("/skills/mine", get(skills::list_mine))
        .route("/skills/create", post(skills::create))
        .route("/skills/:id/edit", post(skills::update))
        .route("/skills/:id/delete", post(skills::delete))
}

/// Video game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list))
        .route("/games/mine", get(games::list_mine))
        .route("/games/create", post(games::create))
        .route("/games/:id/edit", post(games::update))
        .route("/games/:id/delete", post(games::delete))
        .route("/games/:id/assign-skillgroup", post(games::assign_skill_group))
}

/// Tournament routes
fn tournament_routes() -> Router<AppState> {
    Router::new()
        .route("/tournaments", get(tournaments::list))
        .route("/tournaments/mine", get(tournaments::list_mine))
        .route("/tournaments/create", post(tournaments::create))
        .route("/tournaments/:id", get(tournaments::detail))
        .route("/tournaments/:id/edit", post(tournaments::update))
        .route("/tournaments/:id/delete", post(tournaments::delete))
        .route("/tournaments/:id/going", post(tournaments::going))
        .route("/tournaments/:id/not-going", post(tournaments::not_going))
}
