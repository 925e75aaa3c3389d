//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and turns it into calls on the model's controllers.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Debounced search, details navigation, retry and rating

mod input;
mod navigation;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

use crate::model::AppModel;

pub struct AppController<A> {
    pub(crate) model: Arc<AppModel<A>>,
    debounce: Duration,
    /// Bumped on every search box edit; a debounced search only fires if
    /// nothing newer was typed while it waited.
    edit_generation: Arc<AtomicU64>,
}

impl<A> Clone for AppController<A> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            debounce: self.debounce,
            edit_generation: self.edit_generation.clone(),
        }
    }
}

impl<A> AppController<A> {
    pub fn new(model: Arc<AppModel<A>>, debounce: Duration) -> Self {
        Self {
            model,
            debounce,
            edit_generation: Arc::new(AtomicU64::new(0)),
        }
    }
}
