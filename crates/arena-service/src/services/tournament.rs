//! Tournament service
//!
//! CRUD for tournaments and the going / not-going attendance toggle.

use arena_core::entities::Tournament;
use arena_core::{RsvpStatus, Snowflake};
use tracing::{info, instrument};

use crate::dto::mappers::TournamentWithAttendance;
use crate::dto::{
    CreateTournamentRequest, TournamentAttendanceResponse, TournamentResponse,
    UpdateTournamentRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tournament service
pub struct TournamentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TournamentService<'a> {
    /// Create a new TournamentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all tournaments with their attendance sets (public)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TournamentResponse>> {
        let tournaments = self.ctx.tournament_repo().list_all().await?;

        let mut responses = Vec::with_capacity(tournaments.len());
        for tournament in tournaments {
            responses.push(self.with_attendance(tournament).await?.into());
        }

        Ok(responses)
    }

    /// List tournaments created by the actor
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Snowflake) -> ServiceResult<Vec<TournamentResponse>> {
        let tournaments = self.ctx.tournament_repo().list_by_creator(user_id).await?;

        let mut responses = Vec::with_capacity(tournaments.len());
        for tournament in tournaments {
            responses.push(self.with_attendance(tournament).await?.into());
        }

        Ok(responses)
    }

    /// Tournament detail with attendance sets (public)
    #[instrument(skip(self))]
    pub async fn get(&self, tournament_id: Snowflake) -> ServiceResult<TournamentResponse> {
        let tournament = self.load(tournament_id).await?;
        Ok(self.with_attendance(tournament).await?.into())
    }

    /// Create a tournament, stamping the actor as creator
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateTournamentRequest,
    ) -> ServiceResult<TournamentResponse> {
        let tournament = Tournament::new(
            self.ctx.generate_id(),
            request.name,
            request.description,
            request.date,
            user_id,
        );

        self.ctx.tournament_repo().create(&tournament).await?;

        info!(tournament_id = %tournament.id, creator_id = %user_id, "Tournament created");

        Ok(self.with_attendance(tournament).await?.into())
    }

    /// Update a tournament (creator or superuser only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tournament_id: Snowflake,
        user_id: Snowflake,
        request: UpdateTournamentRequest,
    ) -> ServiceResult<TournamentResponse> {
        let mut tournament = self.load(tournament_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &tournament)?;

        if let Some(name) = request.name {
            tournament.name = name;
        }
        if let Some(description) = request.description {
            tournament.description = description;
        }
        if let Some(date) = request.date {
            tournament.date = date;
        }

        self.ctx.tournament_repo().update(&tournament).await?;

        info!(tournament_id = %tournament_id, "Tournament updated");

        Ok(self.with_attendance(tournament).await?.into())
    }

    /// Delete a tournament (creator or superuser only)
    #[instrument(skip(self))]
    pub async fn delete(&self, tournament_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let tournament = self.load(tournament_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(user_id).await?;
        access.require_can_modify(&actor, &tournament)?;

        self.ctx.tournament_repo().delete(tournament_id).await?;

        info!(tournament_id = %tournament_id, "Tournament deleted");

        Ok(())
    }

    /// Toggle the actor's attendance response.
    ///
    /// The tournament must exist (404 before any toggle logic runs). An
    /// unauthenticated caller (`actor = None`) changes nothing; the
    /// attendance summary is returned either way. Both endpoints share the
    /// single [`RsvpStatus::toggle`] transition, which guarantees a user
    /// never sits in both sets.
    #[instrument(skip(self))]
    pub async fn toggle_rsvp(
        &self,
        tournament_id: Snowflake,
        actor: Option<Snowflake>,
        choice: RsvpStatus,
    ) -> ServiceResult<TournamentAttendanceResponse> {
        let tournament = self.load(tournament_id).await?;

        if let Some(user_id) = actor {
            let current = self
                .ctx
                .tournament_repo()
                .rsvp_status(tournament_id, user_id)
                .await?;

            let next = RsvpStatus::toggle(current, choice);

            self.ctx
                .tournament_repo()
                .set_rsvp_status(tournament_id, user_id, next)
                .await?;

            info!(
                tournament_id = %tournament_id,
                user_id = %user_id,
                status = ?next,
                "Attendance updated"
            );
        }

        let with_attendance = self.with_attendance(tournament).await?;
        Ok(TournamentAttendanceResponse::from(&with_attendance))
    }

    /// Load a tournament or fail with NotFound
    async fn load(&self, tournament_id: Snowflake) -> ServiceResult<Tournament> {
        self.ctx
            .tournament_repo()
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tournament", tournament_id.to_string()))
    }

    /// Attach both attendance sets to a tournament
    async fn with_attendance(
        &self,
        tournament: Tournament,
    ) -> ServiceResult<TournamentWithAttendance> {
        let going_users = self.ctx.tournament_repo().going_users(tournament.id).await?;
        let not_going_users = self
            .ctx
            .tournament_repo()
            .not_going_users(tournament.id)
            .await?;

        Ok(TournamentWithAttendance {
            tournament,
            going_users,
            not_going_users,
        })
    }
}
