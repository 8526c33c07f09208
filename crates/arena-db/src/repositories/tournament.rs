//! PostgreSQL implementation of TournamentRepository
//!
//! Attendance responses are single rows in tournament_rsvps; the primary
//! key on (tournament_id, user_id) keeps the going and not-going sets
//! disjoint without any multi-statement coordination.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::Tournament;
use arena_core::traits::{RepoResult, TournamentRepository};
use arena_core::value_objects::{RsvpStatus, Snowflake};

use crate::models::TournamentModel;

use super::error::{map_db_error, tournament_not_found};

/// PostgreSQL implementation of TournamentRepository
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    /// Create a new PgTournamentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List user ids holding the given RSVP status
    async fn users_with_status(
        &self,
        tournament_id: Snowflake,
        status: RsvpStatus,
    ) -> RepoResult<Vec<Snowflake>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM tournament_rsvps
            WHERE tournament_id = $1 AND status = $2
            ORDER BY responded_at
            ",
        )
        .bind(tournament_id.into_inner())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tournament>> {
        let result = sqlx::query_as::<_, TournamentModel>(
            r"
            SELECT id, name, description, date, created_by, created_at, updated_at
            FROM tournaments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tournament::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Tournament>> {
        let results = sqlx::query_as::<_, TournamentModel>(
            r"
            SELECT id, name, description, date, created_by, created_at, updated_at
            FROM tournaments
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tournament::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Tournament>> {
        let results = sqlx::query_as::<_, TournamentModel>(
            r"
            SELECT id, name, description, date, created_by, created_at, updated_at
            FROM tournaments
            WHERE created_by = $1
            ORDER BY id
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tournament::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, tournament: &Tournament) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tournaments (id, name, description, date, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(tournament.id.into_inner())
        .bind(&tournament.name)
        .bind(&tournament.description)
        .bind(tournament.date)
        .bind(tournament.created_by.into_inner())
        .bind(tournament.created_at)
        .bind(tournament.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, tournament: &Tournament) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tournaments
            SET name = $2, description = $3, date = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(tournament.id.into_inner())
        .bind(&tournament.name)
        .bind(&tournament.description)
        .bind(tournament.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tournament_not_found(tournament.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tournaments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tournament_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_creator(&self, creator_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM tournaments WHERE created_by = $1
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn rsvp_status(
        &self,
        tournament_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<RsvpStatus>> {
        let status = sqlx::query_scalar::<_, String>(
            r"
            SELECT status FROM tournament_rsvps
            WHERE tournament_id = $1 AND user_id = $2
            ",
        )
        .bind(tournament_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(status.as_deref().and_then(RsvpStatus::from_db))
    }

    #[instrument(skip(self))]
    async fn set_rsvp_status(
        &self,
        tournament_id: Snowflake,
        user_id: Snowflake,
        status: Option<RsvpStatus>,
    ) -> RepoResult<()> {
        match status {
            Some(status) => {
                sqlx::query(
                    r"
                    INSERT INTO tournament_rsvps (tournament_id, user_id, status, responded_at)
                    VALUES ($1, $2, $3, NOW())
                    ON CONFLICT (tournament_id, user_id)
                    DO UPDATE SET status = EXCLUDED.status, responded_at = NOW()
                    ",
                )
                .bind(tournament_id.into_inner())
                .bind(user_id.into_inner())
                .bind(status.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;
            }
            None => {
                sqlx::query(
                    r"
                    DELETE FROM tournament_rsvps
                    WHERE tournament_id = $1 AND user_id = $2
                    ",
                )
                .bind(tournament_id.into_inner())
                .bind(user_id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;
            }
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn going_users(&self, tournament_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        self.users_with_status(tournament_id, RsvpStatus::Going).await
    }

    #[instrument(skip(self))]
    async fn not_going_users(&self, tournament_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        self.users_with_status(tournament_id, RsvpStatus::NotGoing)
            .await
    }
}
