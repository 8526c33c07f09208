//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::Skill;
use arena_core::traits::{RepoResult, SkillRepository};
use arena_core::value_objects::Snowflake;

use crate::models::SkillModel;

use super::error::{map_db_error, skill_not_found};

/// PostgreSQL implementation of SkillRepository
#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    /// Create a new PgSkillRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, description, skill_group_id, created_by, created_at, updated_at
            FROM skills
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Skill>> {
        // Skill listings are newest-first
        let results = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, description, skill_group_id, created_by, created_at, updated_at
            FROM skills
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Skill>> {
        let results = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, description, skill_group_id, created_by, created_at, updated_at
            FROM skills
            WHERE created_by = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_group(&self, skill_group_id: Snowflake) -> RepoResult<Vec<Skill>> {
        let results = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, description, skill_group_id, created_by, created_at, updated_at
            FROM skills
            WHERE skill_group_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(skill_group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, skill: &Skill) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO skills (id, name, description, skill_group_id, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(skill.id.into_inner())
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(skill.skill_group_id.map(Snowflake::into_inner))
        .bind(skill.created_by.into_inner())
        .bind(skill.created_at)
        .bind(skill.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, skill: &Skill) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE skills
            SET name = $2, description = $3, skill_group_id = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(skill.id.into_inner())
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(skill.skill_group_id.map(Snowflake::into_inner))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(skill_not_found(skill.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM skills WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(skill_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM skills WHERE created_by = $1
            ",
        )
        .bind(creator_id.into_inner())
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
        assert_send_sync::<PgSkillRepository>();
    }
}
