//! Entity to model mappers
//!
//! Conversions between domain entities (kotha-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a row can carry values the domain does not accept

mod comment;
mod interaction;
mod story;
mod user;
