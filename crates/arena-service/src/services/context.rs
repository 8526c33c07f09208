//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the business logic needs.

use std::sync::Arc;

use arena_common::auth::JwtService;
use arena_core::traits::{
    ProfileRepository, RefreshTokenRepository, SkillGroupRepository, SkillRepository,
    TournamentRepository, UserRepository, VideoGameRepository,
};
use arena_core::SnowflakeGenerator;
use arena_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    skill_group_repo: Arc<dyn SkillGroupRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    video_game_repo: Arc<dyn VideoGameRepository>,
    tournament_repo: Arc<dyn TournamentRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        skill_group_repo: Arc<dyn SkillGroupRepository>,
        skill_repo: Arc<dyn SkillRepository>,
        video_game_repo: Arc<dyn VideoGameRepository>,
        tournament_repo: Arc<dyn TournamentRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            profile_repo,
            skill_group_repo,
            skill_repo,
            video_game_repo,
            tournament_repo,
            refresh_token_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the skill group repository
    pub fn skill_group_repo(&self) -> &dyn SkillGroupRepository {
        self.skill_group_repo.as_ref()
    }

    /// Get the skill repository
    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    /// Get the video game repository
    pub fn video_game_repo(&self) -> &dyn VideoGameRepository {
        self.video_game_repo.as_ref()
    }

    /// Get the tournament repository
    pub fn tournament_repo(&self) -> &dyn TournamentRepository {
        self.tournament_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> arena_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    skill_group_repo: Option<Arc<dyn SkillGroupRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    video_game_repo: Option<Arc<dyn VideoGameRepository>>,
    tournament_repo: Option<Arc<dyn TournamentRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            profile_repo: None,
            skill_group_repo: None,
            skill_repo: None,
            video_game_repo: None,
            tournament_repo: None,
            refresh_token_repo: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn skill_group_repo(mut self, repo: Arc<dyn SkillGroupRepository>) -> Self {
        self.skill_group_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn video_game_repo(mut self, repo: Arc<dyn VideoGameRepository>) -> Self {
        self.video_game_repo = Some(repo);
        self
    }

    pub fn tournament_repo(mut self, repo: Arc<dyn TournamentRepository>) -> Self {
        self.tournament_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.skill_group_repo
                .ok_or_else(|| ServiceError::validation("skill_group_repo is required"))?,
            self.skill_repo
                .ok_or_else(|| ServiceError::validation("skill_repo is required"))?,
            self.video_game_repo
                .ok_or_else(|| ServiceError::validation("video_game_repo is required"))?,
            self.tournament_repo
                .ok_or_else(|| ServiceError::validation("tournament_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
