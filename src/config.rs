//! Configuration management for `CityScout`
//!
//! All configuration comes from environment variables, read once at startup
//! and passed explicitly into the server. Provider endpoints default to the
//! real services and are only overridden by tests pointing at stub upstreams.

use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Root configuration for the `CityScout` application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Per-provider credentials
    pub keys: ApiKeys,
    /// Per-provider base URLs
    pub endpoints: Endpoints,
}

/// One credential per upstream provider
///
/// A missing credential is not fatal: the empty string is substituted into
/// the upstream call and the provider's auth failure is forwarded to the
/// caller.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub geocode: String,
    pub darksky: String,
    pub eventbrite: String,
    pub movie: String,
    pub yelp: String,
    pub trail: String,
}

/// Base URL per upstream provider
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub geocode: String,
    pub darksky: String,
    pub eventbrite: String,
    pub movie: String,
    pub yelp: String,
    pub trail: String,
}

// Default value functions
fn default_geocode_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_darksky_url() -> String {
    "https://api.darksky.net/forecast".to_string()
}

fn default_eventbrite_url() -> String {
    "https://www.eventbriteapi.com/v3/events/search".to_string()
}

fn default_movie_url() -> String {
    "https://api.themoviedb.org/3/search/movie".to_string()
}

fn default_yelp_url() -> String {
    "https://api.yelp.com/v3/businesses/search".to_string()
}

fn default_trail_url() -> String {
    "https://www.hikingproject.com/data/get-trails".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode: default_geocode_url(),
            darksky: default_darksky_url(),
            eventbrite: default_eventbrite_url(),
            movie: default_movie_url(),
            yelp: default_yelp_url(),
            trail: default_trail_url(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{value}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            keys: ApiKeys::from_env(),
            endpoints: Endpoints::default(),
        })
    }
}

impl ApiKeys {
    fn from_env() -> Self {
        Self {
            geocode: credential("GEOCODE_API_KEY"),
            darksky: credential("DARKSKY_API_KEY"),
            eventbrite: credential("EVENTBRITE_API_KEY"),
            movie: credential("MOVIE_API_KEY"),
            yelp: credential("YELP_API_KEY"),
            trail: credential("TRAIL_API_KEY"),
        }
    }
}

fn credential(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        tracing::warn!(
            "{name} is not set; requests to its provider will fail with an upstream auth error"
        );
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.geocode,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(endpoints.darksky, "https://api.darksky.net/forecast");
        assert_eq!(endpoints.movie, "https://api.themoviedb.org/3/search/movie");
        assert!(endpoints.yelp.starts_with("https://api.yelp.com"));
    }

    #[test]
    fn test_missing_credential_is_empty() {
        assert_eq!(credential("CITYSCOUT_TEST_UNSET_KEY"), "");
    }

    // Single test so the PORT mutations never race each other
    #[test]
    fn test_port_parsing() {
        // SAFETY: Test environment, mutating a test-scoped variable only
        unsafe {
            env::remove_var("PORT");
        }
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);

        // SAFETY: Test environment
        unsafe {
            env::set_var("PORT", "8080");
        }
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);

        // SAFETY: Test environment
        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        let result = AppConfig::from_env();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("PORT");
        }

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("PORT must be a valid port number")
        );
    }
}
