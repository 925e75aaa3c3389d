//! GusFlix: a terminal browser for the TMDB movie catalog.
//!
//! The `model` module holds the data-orchestration core (gateway, search and
//! details controllers, ratings); `controller` maps key presses onto it and
//! `view` renders snapshots with ratatui.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
