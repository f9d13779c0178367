//! Event search provider integration

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

/// Normalized event record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub link: String,
    pub name: String,
    pub event_date: String,
    pub summary: String,
}

/// Search events near a coordinate pair and map each result
pub async fn fetch(
    client: &UpstreamClient,
    config: &AppConfig,
    latitude: &str,
    longitude: &str,
) -> Result<Vec<Event>> {
    let url = format!(
        "{}?location.latitude={latitude}&location.longitude={longitude}&token={}",
        config.endpoints.eventbrite, config.keys.eventbrite
    );

    let response: SearchResponse = client.get_json(&url).await?;
    Ok(response.events.into_iter().map(Event::from_search).collect())
}

impl Event {
    fn from_search(event: UpstreamEvent) -> Self {
        Self {
            link: event.url,
            name: event.name.text,
            event_date: event.start.local,
            summary: event.summary,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    events: Vec<UpstreamEvent>,
}

#[derive(Debug, Deserialize)]
struct UpstreamEvent {
    url: String,
    name: EventName,
    start: EventStart,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct EventName {
    text: String,
}

#[derive(Debug, Deserialize)]
struct EventStart {
    local: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_nested_name_and_start() {
        let event: UpstreamEvent = serde_json::from_value(json!({
            "url": "https://events.example/e/1",
            "name": { "text": "Fremont Solstice Parade" },
            "start": { "local": "2019-06-22T12:00:00" },
            "summary": "Annual parade through Fremont."
        }))
        .unwrap();

        let mapped = Event::from_search(event);
        assert_eq!(mapped.link, "https://events.example/e/1");
        assert_eq!(mapped.name, "Fremont Solstice Parade");
        assert_eq!(mapped.event_date, "2019-06-22T12:00:00");
        assert_eq!(mapped.summary, "Annual parade through Fremont.");
    }

    #[test]
    fn test_missing_name_text_is_a_decode_error() {
        let result: std::result::Result<UpstreamEvent, _> = serde_json::from_value(json!({
            "url": "https://events.example/e/1",
            "name": {},
            "start": { "local": "2019-06-22T12:00:00" },
            "summary": ""
        }));
        assert!(result.is_err());
    }
}
