//! Route handlers and router
//!
//! Each handler is one linear request→response flow: extract the query
//! parameters, run the provider fetch, reply with the mapped JSON. Failures
//! surface through [`ApiError`]'s response rendering.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::Result;
use crate::config::AppConfig;
use crate::providers::{
    events::{self, Event},
    location::{self, Location},
    movies::{self, Movie},
    trails::{self, Trail},
    weather::{self, Weather},
    yelp::{self, Restaurant},
};
use crate::upstream::UpstreamClient;

/// Placeholder substituted when a caller omits a query parameter. It is
/// forwarded into the upstream URL as-is and comes back as a provider error.
const MISSING_PARAM: &str = "undefined";

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: UpstreamClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            client: UpstreamClient::new()?,
        })
    }
}

/// Free-text search routes take a single `data` parameter
#[derive(Debug, Deserialize)]
struct SearchQuery {
    data: Option<String>,
}

/// Coordinate routes take a bracketed parameter pair
#[derive(Debug, Deserialize)]
struct CoordinateQuery {
    #[serde(rename = "data[latitude]")]
    latitude: Option<String>,
    #[serde(rename = "data[longitude]")]
    longitude: Option<String>,
}

impl CoordinateQuery {
    fn latitude(&self) -> &str {
        self.latitude.as_deref().unwrap_or(MISSING_PARAM)
    }

    fn longitude(&self) -> &str {
        self.longitude.as_deref().unwrap_or(MISSING_PARAM)
    }
}

#[derive(Debug, Deserialize)]
struct MovieQuery {
    #[serde(rename = "data[search_query]")]
    search_query: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/location", get(get_location))
        .route("/weather", get(get_weather))
        .route("/events", get(get_events))
        .route("/movies", get(get_movies))
        .route("/yelp", get(get_yelp))
        .route("/trails", get(get_trails))
        .with_state(state)
}

async fn get_location(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Location>> {
    let data = query.data.as_deref().unwrap_or(MISSING_PARAM);
    tracing::info!(query = data, "handling /location");
    let record = location::fetch(&state.client, &state.config, data).await?;
    Ok(Json(record))
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<Weather>>> {
    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        "handling /weather"
    );
    let records =
        weather::fetch(&state.client, &state.config, query.latitude(), query.longitude()).await?;
    Ok(Json(records))
}

async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<Event>>> {
    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        "handling /events"
    );
    let records =
        events::fetch(&state.client, &state.config, query.latitude(), query.longitude()).await?;
    Ok(Json(records))
}

async fn get_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<Vec<Movie>>> {
    let search_query = query.search_query.as_deref().unwrap_or(MISSING_PARAM);
    tracing::info!(query = search_query, "handling /movies");
    let records = movies::fetch(&state.client, &state.config, search_query).await?;
    Ok(Json(records))
}

async fn get_yelp(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<Restaurant>>> {
    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        "handling /yelp"
    );
    let records =
        yelp::fetch(&state.client, &state.config, query.latitude(), query.longitude()).await?;
    Ok(Json(records))
}

async fn get_trails(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<Trail>>> {
    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        "handling /trails"
    );
    let records =
        trails::fetch(&state.client, &state.config, query.latitude(), query.longitude()).await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_query_falls_back_to_placeholder() {
        let query: CoordinateQuery =
            serde_urlencoded::from_str("").expect("empty query should parse");
        assert_eq!(query.latitude(), "undefined");
        assert_eq!(query.longitude(), "undefined");
    }

    #[test]
    fn test_coordinate_query_parses_bracketed_keys() {
        let query: CoordinateQuery =
            serde_urlencoded::from_str("data[latitude]=47.6&data[longitude]=-122.3").unwrap();
        assert_eq!(query.latitude(), "47.6");
        assert_eq!(query.longitude(), "-122.3");
    }

    #[test]
    fn test_movie_query_parses_bracketed_key() {
        let query: MovieQuery =
            serde_urlencoded::from_str("data[search_query]=Inception").unwrap();
        assert_eq!(query.search_query.as_deref(), Some("Inception"));
    }
}
