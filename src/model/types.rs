//! Core type definitions for the application

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

pub type MovieId = u64;

/// A movie as it appears in the popular list and in search results
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub title: String,
}

impl Movie {
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        poster_url(image_base, self.poster_path.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full record for a single movie, fetched on its own and never merged back
/// into a summary list
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    /// ISO date (`YYYY-MM-DD`), empty when unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        poster_url(image_base, self.poster_path.as_deref())
    }

    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|date| date.year())
    }

    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn poster_url(image_base: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", image_base, p))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sequence number minted per outgoing request. `RequestToken::NONE` is the
/// value before anything was issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const NONE: RequestToken = RequestToken(0);

    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which screen is on display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Details(MovieId),
}

/// Which widget of the catalog screen receives keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub screen: Screen,
    pub focus: Focus,
    /// Text in the search box. Can run ahead of the controller's query while
    /// the debounce window is open.
    pub search_input: String,
    pub list_selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Catalog,
            focus: Focus::Search,
            search_input: String::new(),
            list_selected: 0,
            show_help_popup: false,
        }
    }
}
