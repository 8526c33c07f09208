//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Skill, SkillGroup, Tournament, User, UserProfile, VideoGame};
use crate::error::DomainError;
use crate::value_objects::{RsvpStatus, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Delete a user; the schema cascades to everything the user owns
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<UserProfile>>;

    /// Create a profile row (one per user, at registration)
    async fn create(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Replace the bio text
    async fn update_bio(&self, user_id: Snowflake, bio: &str) -> RepoResult<()>;
}

// ============================================================================
// Skill Group Repository
// ============================================================================

#[async_trait]
pub trait SkillGroupRepository: Send + Sync {
    /// Find skill group by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SkillGroup>>;

    /// List all skill groups
    async fn list_all(&self) -> RepoResult<Vec<SkillGroup>>;

    /// List skill groups owned by a user
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<SkillGroup>>;

    /// Check that a skill group exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Create a new skill group
    async fn create(&self, group: &SkillGroup) -> RepoResult<()>;

    /// Update an existing skill group
    async fn update(&self, group: &SkillGroup) -> RepoResult<()>;

    /// Delete a skill group; its skills cascade, game references are cleared
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count groups owned by a user
    async fn count_by_owner(&self, owner_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Find skill by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Skill>>;

    /// List all skills, newest first
    async fn list_all(&self) -> RepoResult<Vec<Skill>>;

    /// List skills created by a user, newest first
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Skill>>;

    /// List skills belonging to a group
    async fn list_by_group(&self, skill_group_id: Snowflake) -> RepoResult<Vec<Skill>>;

    /// Create a new skill
    async fn create(&self, skill: &Skill) -> RepoResult<()>;

    /// Update an existing skill
    async fn update(&self, skill: &Skill) -> RepoResult<()>;

    /// Delete a skill
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count skills created by a user
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Video Game Repository
// ============================================================================

#[async_trait]
pub trait VideoGameRepository: Send + Sync {
    /// Find game by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<VideoGame>>;

    /// List all games
    async fn list_all(&self) -> RepoResult<Vec<VideoGame>>;

    /// List games created by a user
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<VideoGame>>;

    /// Create a new game
    async fn create(&self, game: &VideoGame) -> RepoResult<()>;

    /// Update an existing game
    async fn update(&self, game: &VideoGame) -> RepoResult<()>;

    /// Delete a game
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count games created by a user
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Tournament Repository
// ============================================================================

#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Find tournament by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tournament>>;

    /// List all tournaments
    async fn list_all(&self) -> RepoResult<Vec<Tournament>>;

    /// List tournaments created by a user
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Tournament>>;

    /// Create a new tournament
    async fn create(&self, tournament: &Tournament) -> RepoResult<()>;

    /// Update an existing tournament
    async fn update(&self, tournament: &Tournament) -> RepoResult<()>;

    /// Delete a tournament and its attendance rows
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count tournaments created by a user
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64>;

    /// Current attendance response of a user, if any
    async fn rsvp_status(
        &self,
        tournament_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<RsvpStatus>>;

    /// Record (`Some`) or withdraw (`None`) a user's attendance response
    async fn set_rsvp_status(
        &self,
        tournament_id: Snowflake,
        user_id: Snowflake,
        status: Option<RsvpStatus>,
    ) -> RepoResult<()>;

    /// Users currently marked as going
    async fn going_users(&self, tournament_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Users currently marked as not going
    async fn not_going_users(&self, tournament_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// A stored refresh token as the session layer sees it
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub user_id: Snowflake,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a freshly issued refresh token
    async fn store(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Look up a token that is neither expired nor revoked
    async fn find_valid(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Revoke a single token
    async fn revoke(&self, token: &str) -> RepoResult<()>;

    /// Revoke every token belonging to a user
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()>;
}
