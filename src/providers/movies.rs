//! Movie search provider integration

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

/// Poster images are served from a fixed base path at a fixed width
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Normalized movie record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: String,
    pub popularity: f64,
    pub released_on: String,
}

/// Search movies by free-text query and map each result
pub async fn fetch(client: &UpstreamClient, config: &AppConfig, query: &str) -> Result<Vec<Movie>> {
    let url = format!(
        "{}?api_key={}&query={}",
        config.endpoints.movie,
        config.keys.movie,
        urlencoding::encode(query)
    );

    let response: SearchResponse = client.get_json(&url).await?;
    Ok(response.results.into_iter().map(Movie::from_search).collect())
}

impl Movie {
    fn from_search(movie: UpstreamMovie) -> Self {
        Self {
            title: movie.title,
            overview: movie.overview,
            average_votes: movie.vote_average,
            total_votes: movie.vote_count,
            image_url: format!("{IMAGE_BASE_URL}{}", movie.poster_path),
            popularity: movie.popularity,
            released_on: movie.release_date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<UpstreamMovie>,
}

#[derive(Debug, Deserialize)]
struct UpstreamMovie {
    title: String,
    overview: String,
    vote_average: f64,
    vote_count: i64,
    #[serde(default)]
    poster_path: String,
    popularity: f64,
    release_date: String,
}
