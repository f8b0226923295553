//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CacheConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdentityConfig, RateLimitConfig, RedisConfig, ServerConfig,
};
