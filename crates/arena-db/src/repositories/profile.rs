//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::UserProfile;
use arena_core::traits::{ProfileRepository, RepoResult};
use arena_core::value_objects::Snowflake;

use crate::models::UserProfileModel;

use super::error::{map_db_error, profile_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, UserProfileModel>(
            r"
            SELECT user_id, bio, updated_at
            FROM user_profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, profile: &UserProfile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_profiles (user_id, bio, updated_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.bio)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_bio(&self, user_id: Snowflake, bio: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET bio = $2, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .bind(bio)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(user_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProfileRepository>();
    }
}
