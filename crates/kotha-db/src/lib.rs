//! # kotha-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `kotha-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Reaction transitions run inside a single transaction: the reaction row
//! delete/insert and the counter delta commit or roll back together, keeping
//! the target's `likes`/`dislikes` in lockstep with the `user_interactions`
//! rows.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolSettings};
pub use repositories::{
    PgCommentRepository, PgReactionRepository, PgSavedStoryRepository, PgStoryRepository,
    PgUserRepository,
};
