//! Hiking trail provider integration

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

/// Normalized trail record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trail {
    pub name: String,
    pub location: String,
    pub length: f64,
    pub stars: f64,
    pub star_votes: i64,
    pub summary: String,
    pub trail_url: String,
    pub conditions: String,
    pub condition_date: String,
    pub condition_time: String,
}

/// Search trails near a coordinate pair and map each record
pub async fn fetch(
    client: &UpstreamClient,
    config: &AppConfig,
    latitude: &str,
    longitude: &str,
) -> Result<Vec<Trail>> {
    let url = format!(
        "{}?lat={latitude}&lon={longitude}&key={}",
        config.endpoints.trail, config.keys.trail
    );

    let response: SearchResponse = client.get_json(&url).await?;
    Ok(response.trails.into_iter().map(Trail::from_search).collect())
}

impl Trail {
    fn from_search(trail: UpstreamTrail) -> Self {
        let (condition_date, condition_time) = split_condition_timestamp(&trail.condition_date);
        Self {
            name: trail.name,
            location: trail.location,
            length: trail.length,
            stars: trail.stars,
            star_votes: trail.star_votes,
            summary: trail.summary,
            trail_url: trail.url,
            conditions: format!("{}. {}.", trail.condition_status, trail.condition_details),
            condition_date,
            condition_time,
        }
    }
}

/// Split a condition timestamp on its first whitespace into date and time
/// portions. A timestamp with no whitespace has an empty time portion.
fn split_condition_timestamp(raw: &str) -> (String, String) {
    match raw.split_once(char::is_whitespace) {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    trails: Vec<UpstreamTrail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamTrail {
    name: String,
    location: String,
    length: f64,
    stars: f64,
    #[serde(rename = "starVotes")]
    star_votes: i64,
    summary: String,
    url: String,
    #[serde(rename = "conditionStatus")]
    condition_status: String,
    #[serde(rename = "conditionDetails")]
    condition_details: String,
    #[serde(rename = "conditionDate")]
    condition_date: String,
}
