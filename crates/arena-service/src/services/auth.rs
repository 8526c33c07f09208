//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use arena_common::auth::{hash_password, validate_password_strength, verify_password};
use arena_core::entities::{User, UserProfile};
use arena_core::traits::RefreshToken;
use arena_core::Snowflake;
use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user.
    ///
    /// Successful registration auto-logs-in: the response carries a token
    /// pair, same as login. The user's profile row is created here so the
    /// one-profile-per-user invariant holds from the start.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check for duplicates
        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user and profile
        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.email);

        self.ctx.user_repo().create(&user, &password_hash).await?;
        self.ctx
            .profile_repo()
            .create(&UserProfile::empty(user_id))
            .await?;

        info!(user_id = %user_id, "User registered successfully");

        // Auto-login
        self.issue_tokens(&user).await
    }

    /// Login with username and password.
    ///
    /// Any failure, unknown username or wrong password alike, yields the
    /// same generic invalid-credentials error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(arena_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(arena_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(
                arena_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using a refresh token; the old token is rotated out
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let stored = self
            .ctx
            .refresh_token_repo()
            .find_valid(&request.refresh_token)
            .await?
            .ok_or(ServiceError::App(arena_common::AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", stored.user_id.to_string()))?;

        // Rotate: revoke the presented token before issuing a new pair
        self.ctx
            .refresh_token_repo()
            .revoke(&request.refresh_token)
            .await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout by revoking the presented refresh token, or all of the
    /// user's tokens when none is given
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        match refresh_token {
            Some(token) => self.ctx.refresh_token_repo().revoke(&token).await?,
            None => {
                self.ctx
                    .refresh_token_repo()
                    .revoke_all_for_user(user_id)
                    .await?;
            }
        }

        info!(user_id = %user_id, "User logged out");

        Ok(())
    }

    /// Generate and persist a token pair for a user
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let expires_at =
            Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry());
        self.ctx
            .refresh_token_repo()
            .store(&RefreshToken {
                user_id: user.id,
                token: token_pair.refresh_token.clone(),
                expires_at,
            })
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}
