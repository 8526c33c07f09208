//! Skill service
//!
//! CRUD for skills. Listings are newest-first; a skill may join any
//! existing group regardless of who owns it.

use arena_core::entities::Skill;
use arena_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateSkillRequest, SkillDeletedResponse, SkillResponse, UpdateSkillRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Skill service
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    /// Create a new SkillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all skills, newest first (authenticated users only)
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().list_all().await?;
        Ok(skills.iter().map(SkillResponse::from).collect())
    }

    /// List the actor's skills, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Snowflake) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().list_by_creator(user_id).await?;
        Ok(skills.iter().map(SkillResponse::from).collect())
    }

    /// Create a skill, stamping the actor as creator
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateSkillRequest,
    ) -> ServiceResult<SkillResponse> {
        let skill_group_id = match request.skill_group.as_deref() {
            Some(raw) => Some(self.resolve_group(raw).await?),
            None => None,
        };

        let skill = Skill::new(
            self.ctx.generate_id(),
            request.name,
            request.description,
            skill_group_id,
            user_id,
        );

        self.ctx.skill_repo().create(&skill).await?;

        info!(skill_id = %skill.id, creator_id = %user_id, "Skill created");

        Ok(SkillResponse::from(&skill))
    }

    /// Update a skill (creator or superuser only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        skill_id: Snowflake,
        user_id: Snowflake,
        request: UpdateSkillRequest,
    ) -> ServiceResult<SkillResponse> {
        let mut skill = self
            .ctx
            .skill_repo()
            .find_by_id(skill_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Skill", skill_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &skill)?;

        if let Some(name) = request.name {
            skill.name = name;
        }
        if let Some(description) = request.description {
            skill.description = description;
        }
        if let Some(group) = request.skill_group {
            let skill_group_id = match group.as_deref() {
                Some(raw) => Some(self.resolve_group(raw).await?),
                None => None,
            };
            skill.set_group(skill_group_id);
        }

        self.ctx.skill_repo().update(&skill).await?;

        info!(skill_id = %skill_id, "Skill updated");

        Ok(SkillResponse::from(&skill))
    }

    /// Delete a skill (creator or superuser only); the response names the
    /// deleted skill
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        skill_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<SkillDeletedResponse> {
        let skill = self
            .ctx
            .skill_repo()
            .find_by_id(skill_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Skill", skill_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &skill)?;

        self.ctx.skill_repo().delete(skill_id).await?;

        info!(skill_id = %skill_id, name = %skill.name, "Skill deleted");

        Ok(SkillDeletedResponse::for_skill(&skill.name))
    }

    /// Parse and verify a skill group reference from a request
    async fn resolve_group(&self, raw: &str) -> ServiceResult<Snowflake> {
        let group_id = raw
            .parse::<Snowflake>()
            .map_err(|_| ServiceError::validation("Invalid skill_group format"))?;

        if !self.ctx.skill_group_repo().exists(group_id).await? {
            return Err(ServiceError::from(DomainError::UnknownSkillGroup(group_id)));
        }

        Ok(group_id)
    }
}
