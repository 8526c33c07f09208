//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, promote_to_superuser, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return (auth, register request)
async fn register_user(server: &TestServer) -> (AuthResponse, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, request)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_home_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_auto_logs_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, request) = register_user(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.user.superuser);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());

    // The token works immediately
    let response = server
        .get_auth("/dashboard", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/register", &request).await.unwrap();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, register_req) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_failure_is_generic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, register_req) = register_user(&server).await;

    // Wrong password and unknown username produce the same rejection
    let wrong_password = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/login", &wrong_password).await.unwrap();
    let a = response.status();
    let body_a = response.text().await.unwrap();

    let unknown_user = LoginRequest {
        username: "nosuchuser12345".to_string(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/login", &unknown_user).await.unwrap();
    let b = response.status();
    let body_b = response.text().await.unwrap();

    assert_eq!(a, StatusCode::UNAUTHORIZED);
    assert_eq!(b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a, body_b, "failure must not reveal which field was wrong");
}

#[tokio::test]
async fn test_refresh_token_rotation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let refresh = serde_json::json!({ "refresh_token": auth.refresh_token });
    let response = server.post("/auth/refresh", &refresh).await.unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(rotated.refresh_token, auth.refresh_token);

    // The old token was rotated out
    let response = server.post("/auth/refresh", &refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Skill Group Tests
// ============================================================================

#[tokio::test]
async fn test_skill_group_create_stamps_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreateSkillGroupRequest::unique();
    let response = server
        .post_auth("/skillgroups/create", &auth.access_token, &request)
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(group.name, request.name);
    assert_eq!(group.owner_id, auth.user.id);
}

#[tokio::test]
async fn test_skill_group_empty_name_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreateSkillGroupRequest {
        name: String::new(),
        description: "no name".to_string(),
    };
    let response = server
        .post_auth("/skillgroups/create", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_skill_group_create_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateSkillGroupRequest::unique();
    let response = server.post("/skillgroups/create", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_skill_group_ownership_and_superuser_override() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    // User A creates "Aiming" with empty description
    let request = CreateSkillGroupRequest {
        name: "Aiming".to_string(),
        description: String::new(),
    };
    let response = server
        .post_auth("/skillgroups/create", &owner.access_token, &request)
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // User B attempts to edit it: Forbidden, not NotFound
    let edit = serde_json::json!({ "name": "Hijacked" });
    let response = server
        .post_auth(
            &format!("/skillgroups/{}/edit", group.id),
            &other.access_token,
            &edit,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Superuser edits it: succeeds
    promote_to_superuser(&other.user.id).await.unwrap();
    let edit = serde_json::json!({ "name": "Precision Aiming" });
    let response = server
        .post_auth(
            &format!("/skillgroups/{}/edit", group.id),
            &other.access_token,
            &edit,
        )
        .await
        .unwrap();
    let updated: SkillGroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Precision Aiming");
}

#[tokio::test]
async fn test_skill_group_delete_forbidden_for_non_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/skillgroups/create",
            &owner.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/skillgroups/{}/delete", group.id),
            &other.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_skill_group_list_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/skillgroups").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Skill Tests
// ============================================================================

#[tokio::test]
async fn test_skills_all_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/skills/all").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_skill_can_join_any_users_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    // Owner creates a group; a different user files a skill under it
    let response = server
        .post_auth(
            "/skillgroups/create",
            &owner.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateSkillRequest::in_group(&group.id);
    let response = server
        .post_auth("/skills/create", &other.access_token, &request)
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(skill.skill_group_id.as_deref(), Some(group.id.as_str()));
    assert_eq!(skill.created_by, other.user.id);
}

#[tokio::test]
async fn test_skill_unknown_group_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreateSkillRequest::in_group("999999999999");
    let response = server
        .post_auth("/skills/create", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_skill_lists_are_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let first = CreateSkillRequest::unique();
    let response = server
        .post_auth("/skills/create", &auth.access_token, &first)
        .await
        .unwrap();
    let first: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let second = CreateSkillRequest::unique();
    let response = server
        .post_auth("/skills/create", &auth.access_token, &second)
        .await
        .unwrap();
    let second: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/skills/mine", &auth.access_token).await.unwrap();
    let skills: Vec<SkillResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let first_pos = skills.iter().position(|s| s.id == first.id).unwrap();
    let second_pos = skills.iter().position(|s| s.id == second.id).unwrap();
    assert!(second_pos < first_pos, "newest skill should come first");
}

#[tokio::test]
async fn test_skill_delete_names_the_skill() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreateSkillRequest::unique();
    let response = server
        .post_auth("/skills/create", &auth.access_token, &request)
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/skills/{}/delete", skill.id), &auth.access_token)
        .await
        .unwrap();
    let deleted: SkillDeletedResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        deleted.message,
        format!("Skill \"{}\" has been deleted.", skill.name)
    );
}

#[tokio::test]
async fn test_skill_delete_forbidden_for_non_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (creator, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/skills/create",
            &creator.access_token,
            &CreateSkillRequest::unique(),
        )
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/skills/{}/delete", skill.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Video Game Tests
// ============================================================================

#[tokio::test]
async fn test_game_crud_and_assignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    // Create a game
    let response = server
        .post_auth(
            "/games/create",
            &auth.access_token,
            &CreateVideoGameRequest::unique(),
        )
        .await
        .unwrap();
    let game: VideoGameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(game.created_by, auth.user.id);
    assert!(game.required_skill_group_id.is_none());

    // Create a group and require it for the game
    let response = server
        .post_auth(
            "/skillgroups/create",
            &auth.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let assign = AssignSkillGroupRequest {
        skill_group: Some(group.id.clone()),
    };
    let response = server
        .post_auth(
            &format!("/games/{}/assign-skillgroup", game.id),
            &auth.access_token,
            &assign,
        )
        .await
        .unwrap();
    let game: VideoGameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(game.required_skill_group_id.as_deref(), Some(group.id.as_str()));
}

#[tokio::test]
async fn test_game_assignment_forbidden_for_non_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (creator, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/games/create",
            &creator.access_token,
            &CreateVideoGameRequest::unique(),
        )
        .await
        .unwrap();
    let game: VideoGameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let assign = AssignSkillGroupRequest { skill_group: None };
    let response = server
        .post_auth(
            &format!("/games/{}/assign-skillgroup", game.id),
            &other.access_token,
            &assign,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_deleting_group_clears_game_reference_and_removes_skills() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    // Group with one skill, required by one game
    let response = server
        .post_auth(
            "/skillgroups/create",
            &auth.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/skills/create",
            &auth.access_token,
            &CreateSkillRequest::in_group(&group.id),
        )
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/games/create",
            &auth.access_token,
            &CreateVideoGameRequest::unique(),
        )
        .await
        .unwrap();
    let game: VideoGameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let assign = AssignSkillGroupRequest {
        skill_group: Some(group.id.clone()),
    };
    server
        .post_auth(
            &format!("/games/{}/assign-skillgroup", game.id),
            &auth.access_token,
            &assign,
        )
        .await
        .unwrap();

    // Delete the group
    let response = server
        .post_auth_empty(
            &format!("/skillgroups/{}/delete", group.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The skill cascaded away
    let response = server.get_auth("/skills/mine", &auth.access_token).await.unwrap();
    let skills: Vec<SkillResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!skills.iter().any(|s| s.id == skill.id));

    // The game survives with the reference cleared
    let response = server.get_auth("/games/mine", &auth.access_token).await.unwrap();
    let games: Vec<VideoGameResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let survivor = games.iter().find(|g| g.id == game.id).unwrap();
    assert!(survivor.required_skill_group_id.is_none());
}

// ============================================================================
// Tournament RSVP Tests
// ============================================================================

#[tokio::test]
async fn test_rsvp_going_then_not_going() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (organizer, _) = register_user(&server).await;
    let (guest, _) = register_user(&server).await;

    // User A creates Tournament "Spring Cup" on 2025-06-01
    let request = CreateTournamentRequest {
        name: "Spring Cup".to_string(),
        description: String::new(),
        date: "2025-06-01".to_string(),
    };
    let response = server
        .post_auth("/tournaments/create", &organizer.access_token, &request)
        .await
        .unwrap();
    let tournament: TournamentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Guest marks going
    let response = server
        .post_auth_empty(
            &format!("/tournaments/{}/going", tournament.id),
            &guest.access_token,
        )
        .await
        .unwrap();
    let attendance: TournamentAttendanceResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(attendance.going_users.contains(&guest.user.id));
    assert!(!attendance.not_going_users.contains(&guest.user.id));

    // Then flips to not going: ends in not_going only, going empty
    let response = server
        .post_auth_empty(
            &format!("/tournaments/{}/not-going", tournament.id),
            &guest.access_token,
        )
        .await
        .unwrap();
    let attendance: TournamentAttendanceResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(attendance.going_users.is_empty());
    assert_eq!(attendance.not_going_users, vec![guest.user.id.clone()]);
}

#[tokio::test]
async fn test_rsvp_going_twice_withdraws() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (organizer, _) = register_user(&server).await;
    let (guest, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/tournaments/create",
            &organizer.access_token,
            &CreateTournamentRequest::unique(),
        )
        .await
        .unwrap();
    let tournament: TournamentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/tournaments/{}/going", tournament.id);

    let response = server.post_auth_empty(&path, &guest.access_token).await.unwrap();
    let attendance: TournamentAttendanceResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(attendance.going_users.contains(&guest.user.id));

    // Second toggle returns the guest to NoResponse
    let response = server.post_auth_empty(&path, &guest.access_token).await.unwrap();
    let attendance: TournamentAttendanceResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!attendance.going_users.contains(&guest.user.id));
    assert!(!attendance.not_going_users.contains(&guest.user.id));
}

#[tokio::test]
async fn test_rsvp_unauthenticated_is_noop() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (organizer, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/tournaments/create",
            &organizer.access_token,
            &CreateTournamentRequest::unique(),
        )
        .await
        .unwrap();
    let tournament: TournamentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous toggle succeeds without changing anything
    let response = server
        .post_empty(&format!("/tournaments/{}/going", tournament.id))
        .await
        .unwrap();
    let attendance: TournamentAttendanceResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(attendance.going_users.is_empty());
    assert!(attendance.not_going_users.is_empty());
}

#[tokio::test]
async fn test_rsvp_missing_tournament_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (guest, _) = register_user(&server).await;

    let response = server
        .post_auth_empty("/tournaments/999999999999/going", &guest.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_tournament_edit_forbidden_for_non_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (organizer, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/tournaments/create",
            &organizer.access_token,
            &CreateTournamentRequest::unique(),
        )
        .await
        .unwrap();
    let tournament: TournamentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let edit = serde_json::json!({ "name": "Hostile Takeover Cup" });
    let response = server
        .post_auth(
            &format!("/tournaments/{}/edit", tournament.id),
            &other.access_token,
            &edit,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_and_profile_edit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    // Fresh account: empty bio, nothing owned
    let response = server.get_auth("/dashboard", &auth.access_token).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.bio, "");
    assert_eq!(dashboard.owned.skill_groups, 0);

    // Update the bio and create a group; the dashboard reflects both
    let bio = UpdateProfileRequest {
        bio: "Support main".to_string(),
    };
    let response = server
        .post_auth("/profile/edit", &auth.access_token, &bio)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server
        .post_auth(
            "/skillgroups/create",
            &auth.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();

    let response = server.get_auth("/dashboard", &auth.access_token).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.bio, "Support main");
    assert_eq!(dashboard.owned.skill_groups, 1);
}

#[tokio::test]
async fn test_account_delete_cascades_to_owned_resources() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/skillgroups/create",
            &auth.access_token,
            &CreateSkillGroupRequest::unique(),
        )
        .await
        .unwrap();
    let group: SkillGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/tournaments/create",
            &auth.access_token,
            &CreateTournamentRequest::unique(),
        )
        .await
        .unwrap();
    let tournament: TournamentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Delete the account
    let response = server
        .post_auth_empty("/account/delete", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Owned resources are gone from the public listings
    let response = server.get("/skillgroups").await.unwrap();
    let groups: Vec<SkillGroupResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!groups.iter().any(|g| g.id == group.id));

    let response = server.get("/tournaments").await.unwrap();
    let tournaments: Vec<TournamentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!tournaments.iter().any(|t| t.id == tournament.id));
}
