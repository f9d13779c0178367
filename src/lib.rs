//! `CityScout` - stateless city exploration API
//!
//! This library provides a small HTTP proxy that forwards requests to
//! third-party geolocation and lifestyle providers (geocoding, weather,
//! events, movies, restaurant search, hiking trails) and reshapes each
//! upstream JSON response into a simplified record.

pub mod api;
pub mod config;
pub mod error;
pub mod providers;
pub mod upstream;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::AppConfig;
pub use error::ApiError;
pub use upstream::UpstreamClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ApiError>;
