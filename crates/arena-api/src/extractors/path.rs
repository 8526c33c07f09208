//! Path parameter extraction
//!
//! Type-safe extraction of Snowflake IDs from `{id}` path segments.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use arena_core::Snowflake;

use crate::response::ApiError;

/// Extract the `{id}` path segment as a Snowflake
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = raw
            .parse::<Snowflake>()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))?;

        Ok(IdPath(id))
    }
}
