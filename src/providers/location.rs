//! Geocoding provider integration

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::upstream::UpstreamClient;

/// Normalized geocoding record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Location {
    /// The caller's search string, echoed verbatim
    pub search_query: String,
    /// Formatted address from the provider
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Geocode a free-text address and map the first result
pub async fn fetch(client: &UpstreamClient, config: &AppConfig, query: &str) -> Result<Location> {
    let url = format!(
        "{}?address={}&key={}",
        config.endpoints.geocode,
        urlencoding::encode(query),
        config.keys.geocode
    );

    let response: GeocodeResponse = client.get_json(&url).await?;
    let first = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::mapping("geocode response contained no results"))?;

    Ok(Location::from_geocode(query, first))
}

impl Location {
    fn from_geocode(query: &str, result: GeocodeResult) -> Self {
        Self {
            search_query: query.to_string(),
            formatted_query: result.formatted_address,
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}
