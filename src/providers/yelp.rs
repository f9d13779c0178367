//! Restaurant search provider integration
//!
//! The only provider that authenticates with a bearer header instead of a
//! query-string credential. The search term is fixed to restaurants.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

/// Normalized restaurant record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub rating: f64,
    pub url: String,
}

/// Search restaurants near a coordinate pair and map each business
pub async fn fetch(
    client: &UpstreamClient,
    config: &AppConfig,
    latitude: &str,
    longitude: &str,
) -> Result<Vec<Restaurant>> {
    let url = format!(
        "{}?term=restaurants&latitude={latitude}&longitude={longitude}",
        config.endpoints.yelp
    );

    let response: SearchResponse = client.get_json_with_bearer(&url, &config.keys.yelp).await?;
    Ok(response
        .businesses
        .into_iter()
        .map(Restaurant::from_business)
        .collect())
}

impl Restaurant {
    fn from_business(business: Business) -> Self {
        Self {
            name: business.name,
            image_url: business.image_url,
            price: business.price,
            rating: business.rating,
            url: business.url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
struct Business {
    name: String,
    image_url: String,
    price: String,
    rating: f64,
    url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_business_fields_directly() {
        let business: Business = serde_json::from_value(json!({
            "name": "Pike Place Chowder",
            "image_url": "https://img.example/chowder.jpg",
            "price": "$$",
            "rating": 4.5,
            "url": "https://biz.example/pike-place-chowder"
        }))
        .unwrap();

        let mapped = Restaurant::from_business(business);
        assert_eq!(mapped.name, "Pike Place Chowder");
        assert_eq!(mapped.image_url, "https://img.example/chowder.jpg");
        assert_eq!(mapped.price, "$$");
        assert_eq!(mapped.rating, 4.5);
        assert_eq!(mapped.url, "https://biz.example/pike-place-chowder");
    }
}
