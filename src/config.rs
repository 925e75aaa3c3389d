//! Runtime configuration read from the environment (and an optional `.env`)

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";
pub const DEFAULT_DEBOUNCE_MS: u64 = 350;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

const API_KEY_VAR: &str = "TMDB_API_KEY";
const BASE_URL_VAR: &str = "TMDB_BASE_URL";
const IMAGE_BASE_URL_VAR: &str = "TMDB_IMAGE_BASE_URL";
const LANGUAGE_VAR: &str = "TMDB_LANGUAGE";
const DEBOUNCE_VAR: &str = "GUSFLIX_DEBOUNCE_MS";
const TIMEOUT_VAR: &str = "GUSFLIX_REQUEST_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct Config {
    /// May be empty. The service then answers 401, which the gateway
    /// reports as a network error instead of failing at startup.
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub debounce: Duration,
    /// `None` disables the per-request timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            request_timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Could not read .env file"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR).unwrap_or_default().trim().to_string();
        if api_key.is_empty() {
            tracing::warn!("{} is not set; catalog requests will be rejected", API_KEY_VAR);
        }

        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let debounce = parse_u64(&lookup, DEBOUNCE_VAR)
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce);

        let request_timeout = match parse_u64(&lookup, TIMEOUT_VAR) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.request_timeout,
        };

        Self {
            api_key,
            base_url: non_empty(BASE_URL_VAR)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            image_base_url: non_empty(IMAGE_BASE_URL_VAR)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.image_base_url),
            language: non_empty(LANGUAGE_VAR).unwrap_or(defaults.language),
            debounce,
            request_timeout,
        }
    }
}

fn parse_u64<F>(lookup: &F, name: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var = name, value = %raw, error = %e, "Ignoring malformed setting");
            None
        }
    }
}
