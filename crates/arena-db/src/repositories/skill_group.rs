//! PostgreSQL implementation of SkillGroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::SkillGroup;
use arena_core::traits::{RepoResult, SkillGroupRepository};
use arena_core::value_objects::Snowflake;

use crate::models::SkillGroupModel;

use super::error::{map_db_error, skill_group_not_found};

/// PostgreSQL implementation of SkillGroupRepository
#[derive(Clone)]
pub struct PgSkillGroupRepository {
    pool: PgPool,
}

impl PgSkillGroupRepository {
    /// Create a new PgSkillGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillGroupRepository for PgSkillGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SkillGroup>> {
        let result = sqlx::query_as::<_, SkillGroupModel>(
            r"
            SELECT id, name, description, owner_id, created_at, updated_at
            FROM skill_groups
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SkillGroup::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SkillGroup>> {
        let results = sqlx::query_as::<_, SkillGroupModel>(
            r"
            SELECT id, name, description, owner_id, created_at, updated_at
            FROM skill_groups
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SkillGroup::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<SkillGroup>> {
        let results = sqlx::query_as::<_, SkillGroupModel>(
            r"
            SELECT id, name, description, owner_id, created_at, updated_at
            FROM skill_groups
            WHERE owner_id = $1
            ORDER BY id
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SkillGroup::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM skill_groups WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &SkillGroup) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO skill_groups (id, name, description, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.owner_id.into_inner())
        .bind(group.created_at)
        .bind(group.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, group: &SkillGroup) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE skill_groups
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(&group.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(skill_group_not_found(group.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Skills in the group cascade away; video_games only lose the
        // required_skill_group_id reference (ON DELETE SET NULL).
        let result = sqlx::query(
            r"
            DELETE FROM skill_groups WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(skill_group_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM skill_groups WHERE owner_id = $1
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSkillGroupRepository>();
    }
}
