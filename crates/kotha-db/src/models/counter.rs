//! Counter pair row (from RETURNING clauses)

use sqlx::FromRow;

/// Fresh likes/dislikes returned by a counter update
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CounterModel {
    pub likes: i64,
    pub dislikes: i64,
}
