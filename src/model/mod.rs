//! Model module - Application state and data types
//!
//! This module contains the data structures and the data-orchestration logic.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (movies, request tokens, UI state)
//! - `error`: Catalog error taxonomy
//! - `view_state`: `Idle/Loading/Loaded/Error` state exposed to the view
//! - `tmdb_client`: Catalog API trait and its TMDB implementation
//! - `search`: Search controller publishing the catalog view-state
//! - `details`: Details controller for a single movie
//! - `ratings`: Session-local rating tracker
//! - `app_model`: Main application model owning the controllers

mod types;
mod error;
mod view_state;
mod tmdb_client;
mod search;
mod details;
mod ratings;
mod app_model;

#[cfg(test)]
pub(crate) mod testing;

pub use types::{Focus, Genre, Movie, MovieDetails, MovieId, RequestToken, Screen, UiState};

pub use error::{CatalogError, Result};

pub use view_state::ViewState;

pub use tmdb_client::{CatalogApi, TmdbClient};

pub use search::{CatalogState, Outcome, PendingSearch, SearchController};

pub use details::{DetailsController, DetailsState, PendingDetails};

pub use ratings::{rating_label, RatingTracker, MAX_RATING, MIN_RATING};

pub use app_model::{AppModel, AppSnapshot};
