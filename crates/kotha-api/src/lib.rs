//! # kotha-api
//!
//! REST API server for the anonymous story-sharing service. Thin axum
//! handlers over the service layer: identity comes from a long-lived
//! anonymous cookie, everything else is parse, delegate, serialize.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
