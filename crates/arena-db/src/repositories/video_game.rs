//! PostgreSQL implementation of VideoGameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::VideoGame;
use arena_core::traits::{RepoResult, VideoGameRepository};
use arena_core::value_objects::Snowflake;

use crate::models::VideoGameModel;

use super::error::{map_db_error, video_game_not_found};

/// PostgreSQL implementation of VideoGameRepository
#[derive(Clone)]
pub struct PgVideoGameRepository {
    pool: PgPool,
}

impl PgVideoGameRepository {
    /// Create a new PgVideoGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoGameRepository for PgVideoGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<VideoGame>> {
        let result = sqlx::query_as::<_, VideoGameModel>(
            r"
            SELECT id, title, description, release_date, created_by,
                   required_skill_group_id, created_at, updated_at
            FROM video_games
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(VideoGame::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<VideoGame>> {
        let results = sqlx::query_as::<_, VideoGameModel>(
            r"
            SELECT id, title, description, release_date, created_by,
                   required_skill_group_id, created_at, updated_at
            FROM video_games
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(VideoGame::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<VideoGame>> {
        let results = sqlx::query_as::<_, VideoGameModel>(
            r"
            SELECT id, title, description, release_date, created_by,
                   required_skill_group_id, created_at, updated_at
            FROM video_games
            WHERE created_by = $1
            ORDER BY id
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(VideoGame::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, game: &VideoGame) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO video_games (id, title, description, release_date, created_by,
                                     required_skill_group_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(game.id.into_inner())
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.release_date)
        .bind(game.created_by.into_inner())
        .bind(game.required_skill_group_id.map(Snowflake::into_inner))
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, game: &VideoGame) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE video_games
            SET title = $2, description = $3, release_date = $4,
                required_skill_group_id = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(game.id.into_inner())
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.release_date)
        .bind(game.required_skill_group_id.map(Snowflake::into_inner))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(video_game_not_found(game.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM video_games WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(video_game_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM video_games WHERE created_by = $1
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
