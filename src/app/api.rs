// src/app/api.rs — thin blocking client for the TMDB v3 REST API.
//
// One request per call, no retries, no caching; callers own any memoization.
// Every failure mode (transport, non-success status, undecodable body) comes
// back as an `ApiError` so "no results" and "fetch failed" stay distinct.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::app::types::{
    Credits, Genre, GenreListResponse, ImageCollection, MovieDetail, MovieListing,
};
use crate::config::AppConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {endpoint}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },

    #[error("malformed response from {endpoint}: {source}")]
    Malformed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("background fetch aborted")]
    Aborted,
}

pub struct CatalogClient {
    api_key: String,
    api_base: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(api_key: String, cfg: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent("reelgrid/catalog")
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;
        Ok(Self {
            api_key,
            api_base: cfg.api_base.clone(),
            http,
        })
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api_base, endpoint);
        debug!("GET {endpoint}");
        let resp = self
            .http
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }
        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|source| ApiError::Malformed {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    pub fn top_rated(&self, page: u32) -> Result<MovieListing, ApiError> {
        self.get("/movie/top_rated", &[("page", page.to_string())])
    }

    pub fn search_movies(&self, query: &str, page: u32) -> Result<MovieListing, ApiError> {
        self.get(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("include_adult", "false".to_string()),
                ("language", "en-US".to_string()),
                ("page", page.to_string()),
            ],
        )
    }

    pub fn movies_by_genre(&self, genre_id: i64, page: u32) -> Result<MovieListing, ApiError> {
        self.get(
            "/discover/movie",
            &[
                ("with_genres", genre_id.to_string()),
                ("page", page.to_string()),
            ],
        )
    }

    pub fn movie_by_id(&self, movie_id: u64) -> Result<MovieDetail, ApiError> {
        self.get(&format!("/movie/{movie_id}"), &[])
    }

    pub fn movie_credits(&self, movie_id: u64) -> Result<Credits, ApiError> {
        self.get(&format!("/movie/{movie_id}/credits"), &[])
    }

    pub fn movie_images(&self, movie_id: u64) -> Result<ImageCollection, ApiError> {
        self.get(&format!("/movie/{movie_id}/images"), &[])
    }

    pub fn genre_list(&self) -> Result<Vec<Genre>, ApiError> {
        let resp: GenreListResponse = self.get("/genre/movie/list", &[])?;
        Ok(resp.genres)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::types::{GenreListResponse, MovieListing};

    #[test]
    fn listing_decodes_with_missing_optionals() {
        let body = r#"{
            "page": 2,
            "results": [
                {"id": 550, "title": "Fight Club", "vote_average": 8.4,
                 "genre_ids": [18], "poster_path": "/a.jpg"},
                {"id": 551}
            ],
            "total_pages": 500,
            "total_results": 10000
        }"#;
        let listing: MovieListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(listing.results.len(), 2);
        assert_eq!(listing.results[0].title, "Fight Club");
        assert_eq!(listing.results[0].genre_ids, vec![18]);
        // Bare record falls back to defaults instead of failing the whole page.
        assert_eq!(listing.results[1].title, "");
        assert!(listing.results[1].poster_path.is_none());
    }

    #[test]
    fn listing_page_defaults_to_one() {
        let listing: MovieListing = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(listing.page, 1);
        assert!(listing.results.is_empty());
    }

    #[test]
    fn genre_list_decodes() {
        let body = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]}"#;
        let resp: GenreListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.genres.len(), 2);
        assert_eq!(resp.genres[0].name, "Action");
    }

    #[test]
    fn truncated_body_is_a_decode_error() {
        let err = serde_json::from_str::<MovieListing>(r#"{"results": ["#);
        assert!(err.is_err());
    }
}
