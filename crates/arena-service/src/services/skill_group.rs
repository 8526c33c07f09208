//! Skill group service
//!
//! CRUD for skill groups with ownership-gated mutations.

use arena_core::entities::SkillGroup;
use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CreateSkillGroupRequest, SkillGroupDetailResponse, SkillGroupResponse, SkillResponse,
    UpdateSkillGroupRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Skill group service
pub struct SkillGroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillGroupService<'a> {
    /// Create a new SkillGroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all skill groups (public)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SkillGroupResponse>> {
        let groups = self.ctx.skill_group_repo().list_all().await?;
        Ok(groups.iter().map(SkillGroupResponse::from).collect())
    }

    /// List skill groups owned by the actor
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Snowflake) -> ServiceResult<Vec<SkillGroupResponse>> {
        let groups = self.ctx.skill_group_repo().list_by_owner(user_id).await?;
        Ok(groups.iter().map(SkillGroupResponse::from).collect())
    }

    /// Skill group detail with its skills (public)
    #[instrument(skip(self))]
    pub async fn get(&self, group_id: Snowflake) -> ServiceResult<SkillGroupDetailResponse> {
        let group = self
            .ctx
            .skill_group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("SkillGroup", group_id.to_string()))?;

        let skills = self.ctx.skill_repo().list_by_group(group_id).await?;

        Ok(SkillGroupDetailResponse {
            skill_group: SkillGroupResponse::from(&group),
            skills: skills.iter().map(SkillResponse::from).collect(),
        })
    }

    /// Create a skill group, stamping the actor as owner
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateSkillGroupRequest,
    ) -> ServiceResult<SkillGroupResponse> {
        let group = SkillGroup::new(
            self.ctx.generate_id(),
            request.name,
            request.description,
            user_id,
        );

        self.ctx.skill_group_repo().create(&group).await?;

        info!(group_id = %group.id, owner_id = %user_id, "Skill group created");

        Ok(SkillGroupResponse::from(&group))
    }

    /// Update a skill group (owner or superuser only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        group_id: Snowflake,
        user_id: Snowflake,
        request: UpdateSkillGroupRequest,
    ) -> ServiceResult<SkillGroupResponse> {
        let mut group = self
            .ctx
            .skill_group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("SkillGroup", group_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &group)?;

        if let Some(name) = request.name {
            group.set_name(name);
        }
        if let Some(description) = request.description {
            group.set_description(description);
        }

        self.ctx.skill_group_repo().update(&group).await?;

        info!(group_id = %group_id, "Skill group updated");

        Ok(SkillGroupResponse::from(&group))
    }

    /// Delete a skill group (owner or superuser only).
    ///
    /// Skills inside the group are removed; games requiring it merely lose
    /// the reference.
    #[instrument(skip(self))]
    pub async fn delete(&self, group_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let group = self
            .ctx
            .skill_group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("SkillGroup", group_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &group)?;

        self.ctx.skill_group_repo().delete(group_id).await?;

        info!(group_id = %group_id, "Skill group deleted");

        Ok(())
    }
}
