//! Daily forecast provider integration

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

/// Normalized daily forecast entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Weather {
    pub forecast: String,
    /// Truncated date string, e.g. `Fri Jul 16 2010`
    pub time: String,
}

/// Fetch the daily forecast for a coordinate pair and map each entry
///
/// The provider authenticates via the URL path, not a query parameter.
pub async fn fetch(
    client: &UpstreamClient,
    config: &AppConfig,
    latitude: &str,
    longitude: &str,
) -> Result<Vec<Weather>> {
    let url = format!(
        "{}/{}/{latitude},{longitude}",
        config.endpoints.darksky, config.keys.darksky
    );

    let response: ForecastResponse = client.get_json(&url).await?;
    Ok(response
        .daily
        .data
        .into_iter()
        .map(Weather::from_daily)
        .collect())
}

impl Weather {
    fn from_daily(day: DailyEntry) -> Self {
        Self {
            forecast: day.summary,
            time: format_day(day.time),
        }
    }
}

/// Render unix seconds as a truncated date string (`Ddd Mon DD YYYY`)
fn format_day(unix_seconds: i64) -> String {
    chrono::DateTime::from_timestamp(unix_seconds, 0)
        .map_or_else(String::new, |dt| dt.format("%a %b %d %Y").to_string())
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    data: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    summary: String,
    time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_day_truncates_to_date() {
        // 2010-07-16T00:00:00Z
        assert_eq!(format_day(1_279_238_400), "Fri Jul 16 2010");
        // Single-digit days keep the leading zero
        assert_eq!(format_day(0), "Thu Jan 01 1970");
    }

    #[test]
    fn test_maps_every_entry_in_order() {
        let response: ForecastResponse = serde_json::from_value(json!({
            "daily": {
                "data": [
                    { "summary": "Clear throughout the day.", "time": 1_279_238_400 },
                    { "summary": "Light rain in the morning.", "time": 1_279_324_800 },
                    { "summary": "Partly cloudy.", "time": 1_279_411_200 }
                ]
            }
        }))
        .unwrap();

        let mapped: Vec<Weather> = response.daily.data.into_iter().map(Weather::from_daily).collect();
        assert_eq!(mapped.len(), 3);
        assert_eq!(mapped[0].forecast, "Clear throughout the day.");
        assert_eq!(mapped[1].forecast, "Light rain in the morning.");
        assert_eq!(mapped[2].forecast, "Partly cloudy.");
        assert_eq!(mapped[0].time, "Fri Jul 16 2010");
        assert_eq!(mapped[1].time, "Sat Jul 17 2010");
        assert!(mapped.iter().all(|w| !w.forecast.is_empty()));
    }
}
