//! User service
//!
//! Current-user queries, profile updates, and account deletion.

use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, DashboardResponse, ProfileResponse, ResourceCounts, UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Dashboard summary: user, bio, and owned-resource counts
    #[instrument(skip(self))]
    pub async fn dashboard(&self, user_id: Snowflake) -> ServiceResult<DashboardResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let owned = ResourceCounts {
            skill_groups: self.ctx.skill_group_repo().count_by_owner(user_id).await?,
            skills: self.ctx.skill_repo().count_by_creator(user_id).await?,
            video_games: self.ctx.video_game_repo().count_by_creator(user_id).await?,
            tournaments: self.ctx.tournament_repo().count_by_creator(user_id).await?,
        };

        Ok(DashboardResponse {
            user: CurrentUserResponse::from(&user),
            bio: profile.bio,
            owned,
        })
    }

    /// Update the current user's profile bio
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        self.ctx
            .profile_repo()
            .update_bio(user_id, &request.bio)
            .await?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        info!(user_id = %user_id, "Profile updated");

        Ok(ProfileResponse::from(&profile))
    }

    /// Delete the current user's account.
    ///
    /// The schema cascades: owned skill groups, skills, video games,
    /// tournaments, the profile, RSVPs and refresh tokens all go with it.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "Account deleted");

        Ok(())
    }
}
