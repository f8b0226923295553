//! # kotha-common
//!
//! Shared application concerns: configuration, the application error type,
//! and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, AppSettings, CacheConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdentityConfig, RateLimitConfig, RedisConfig, ServerConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
