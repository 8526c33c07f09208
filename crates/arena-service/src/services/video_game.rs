//! Video game service
//!
//! CRUD for the game catalog plus skill-group assignment.

use arena_core::entities::VideoGame;
use arena_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AssignSkillGroupRequest, CreateVideoGameRequest, UpdateVideoGameRequest, VideoGameResponse,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Video game service
pub struct VideoGameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VideoGameService<'a> {
    /// Create a new VideoGameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all games (public)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<VideoGameResponse>> {
        let games = self.ctx.video_game_repo().list_all().await?;
        Ok(games.iter().map(VideoGameResponse::from).collect())
    }

    /// List games created by the actor
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Snowflake) -> ServiceResult<Vec<VideoGameResponse>> {
        let games = self.ctx.video_game_repo().list_by_creator(user_id).await?;
        Ok(games.iter().map(VideoGameResponse::from).collect())
    }

    /// Create a game, stamping the actor as creator
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateVideoGameRequest,
    ) -> ServiceResult<VideoGameResponse> {
        let game = VideoGame::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            request.release_date,
            user_id,
        );

        self.ctx.video_game_repo().create(&game).await?;

        info!(game_id = %game.id, creator_id = %user_id, "Video game created");

        Ok(VideoGameResponse::from(&game))
    }

    /// Update a game (creator or superuser only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        game_id: Snowflake,
        user_id: Snowflake,
        request: UpdateVideoGameRequest,
    ) -> ServiceResult<VideoGameResponse> {
        let mut game = self
            .ctx
            .video_game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("VideoGame", game_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &game)?;

        if let Some(title) = request.title {
            game.title = title;
        }
        if let Some(description) = request.description {
            game.description = description;
        }
        if let Some(release_date) = request.release_date {
            game.release_date = release_date;
        }

        self.ctx.video_game_repo().update(&game).await?;

        info!(game_id = %game_id, "Video game updated");

        Ok(VideoGameResponse::from(&game))
    }

    /// Delete a game (creator or superuser only)
    #[instrument(skip(self))]
    pub async fn delete(&self, game_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let game = self
            .ctx
            .video_game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("VideoGame", game_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &game)?;

        self.ctx.video_game_repo().delete(game_id).await?;

        info!(game_id = %game_id, "Video game deleted");

        Ok(())
    }

    /// Set or clear the skill group a game requires (creator or superuser
    /// only; any existing group may be assigned)
    #[instrument(skip(self, request))]
    pub async fn assign_skill_group(
        &self,
        game_id: Snowflake,
        user_id: Snowflake,
        request: AssignSkillGroupRequest,
    ) -> ServiceResult<VideoGameResponse> {
        let mut game = self
            .ctx
            .video_game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("VideoGame", game_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &game)?;

        let skill_group_id = match request.skill_group.as_deref() {
            Some(raw) => {
                let group_id = raw
                    .parse::<Snowflake>()
                    .map_err(|_| ServiceError::validation("Invalid skill_group format"))?;

                if !self.ctx.skill_group_repo().exists(group_id).await? {
                    return Err(ServiceError::from(DomainError::UnknownSkillGroup(group_id)));
                }

                Some(group_id)
            }
            None => None,
        };

        game.set_required_skill_group(skill_group_id);
        self.ctx.video_game_repo().update(&game).await?;

        info!(
            game_id = %game_id,
            skill_group = ?skill_group_id,
            "Required skill group assigned"
        );

        Ok(VideoGameResponse::from(&game))
    }
}
