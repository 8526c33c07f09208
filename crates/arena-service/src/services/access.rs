//! Access service
//!
//! Resolves the acting user into an [`Actor`] and applies the ownership
//! predicate before mutations. Every update/delete path in the resource
//! services goes through [`AccessService::require_can_modify`], so a
//! failed check is always a 403 distinct from a 404.

use arena_core::access::{can_modify, Actor, Owned};
use arena_core::Snowflake;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Access service for ownership checks
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the acting user, including the superuser flag
    #[instrument(skip(self))]
    pub async fn actor(&self, user_id: Snowflake) -> ServiceResult<Actor> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(user.actor())
    }

    /// Reject with Forbidden unless the actor may modify the resource
    pub fn require_can_modify<R: Owned>(&self, actor: &Actor, resource: &R) -> ServiceResult<()> {
        if can_modify(actor, resource) {
            Ok(())
        } else {
            debug!(actor_id = %actor.id, owner_id = %resource.owner_id(), "Ownership check failed");
            Err(ServiceError::Forbidden)
        }
    }
}
