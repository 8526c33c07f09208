//! # arena-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `arena-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The ownership cascade rules live in the SQL schema (see `migrations/`);
//! repositories issue single-statement mutations and rely on them.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgProfileRepository, PgRefreshTokenRepository, PgSkillGroupRepository, PgSkillRepository,
    PgTournamentRepository, PgUserRepository, PgVideoGameRepository,
};
