//! TMDB API client wrapper
//!
//! [`CatalogApi`] is the seam the controllers depend on; [`TmdbClient`] is the
//! reqwest-backed implementation. None of these calls retry or touch local
//! state: they return a value or a [`CatalogError`].

use std::future::Future;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::{log_api_request, log_api_result};
use super::error::{CatalogError, Result};
use super::types::{Movie, MovieDetails, MovieId};

/// Read operations against the remote movie catalog
pub trait CatalogApi: Send + Sync + 'static {
    /// First page of the popular list.
    fn fetch_popular(&self) -> impl Future<Output = Result<Vec<Movie>>> + Send;

    /// First page of search results. `query` must not be empty.
    fn search_movies(&self, query: &str) -> impl Future<Output = Result<Vec<Movie>>> + Send;

    fn fetch_details(&self, id: MovieId) -> impl Future<Output = Result<MovieDetails>> + Send;
}

/// Paged list envelope; only the first page is ever read
#[derive(Deserialize)]
struct MoviePage {
    results: Vec<Movie>,
}

#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CatalogError::network(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.base_url, language = %config.language, "TMDB client initialized");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut query = vec![("api_key", self.api_key.as_str()), ("language", self.language.as_str())];
        query.extend_from_slice(params);

        Url::parse_with_params(&format!("{}{}", self.base_url, path), &query)
            .map_err(|e| CatalogError::network(format!("invalid URL for {}: {}", path, e)))
    }

    /// GET `path` and decode the body as `T`. Non-2xx statuses come back as
    /// `Network` errors carrying the status code.
    #[tracing::instrument(level = "debug", skip(self, params))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path, params)?;

        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::debug!(path, status = status.as_u16(), body = %truncate(&body, 200), "Non-success response");
            return Err(CatalogError::http_status(status.as_u16(), status_reason(status)));
        }

        serde_json::from_str(&body).map_err(|e| CatalogError::parse(format!("{}: {}", path, e)))
    }
}

impl CatalogApi for TmdbClient {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        log_api_request!("fetch_popular");
        let result = self
            .get_json::<MoviePage>("/movie/popular", &[])
            .await
            .map(|page| page.results);
        log_api_result!("fetch_popular", result);
        result
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        if query.is_empty() {
            tracing::warn!("search_movies called with an empty query");
            return Ok(Vec::new());
        }

        log_api_request!("search_movies", query);
        let result = self
            .get_json::<MoviePage>("/search/movie", &[("query", query)])
            .await
            .map(|page| page.results);
        log_api_result!("search_movies", result);
        result
    }

    async fn fetch_details(&self, id: MovieId) -> Result<MovieDetails> {
        log_api_request!("fetch_details", id);
        let result = match self.get_json::<MovieDetails>(&format!("/movie/{}", id), &[]).await {
            Err(CatalogError::Network { status: Some(404), .. }) => Err(CatalogError::NotFound { id }),
            other => other,
        };
        log_api_result!("fetch_details", result);
        result
    }
}

fn transport_error(error: reqwest::Error) -> CatalogError {
    // Strip the URL: it carries the API key
    let error = error.without_url();
    if error.is_timeout() {
        CatalogError::network(format!("request timed out: {}", error))
    } else {
        CatalogError::network(error.to_string())
    }
}

fn status_reason(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
