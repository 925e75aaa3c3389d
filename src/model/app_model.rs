//! Main application model with state management
//!
//! Owns explicit instances of the search controller, the details controller
//! of the current navigation and the rating tracker, plus plain UI state.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::details::{DetailsController, DetailsState};
use super::ratings::RatingTracker;
use super::search::{CatalogState, SearchController};
use super::tmdb_client::CatalogApi;
use super::types::{Focus, Movie, MovieId, Screen, UiState};

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    pub ui: UiState,
    /// Query the catalog state belongs to, not the text being typed
    pub catalog_query: String,
    pub catalog: CatalogState,
    pub details: Option<DetailsState>,
    pub rating: Option<u8>,
    pub image_base_url: String,
}

pub struct AppModel<A> {
    api: Arc<A>,
    search: SearchController<A>,
    details: Mutex<Option<DetailsController<A>>>,
    ratings: RatingTracker,
    ui_state: Mutex<UiState>,
    should_quit: Mutex<bool>,
    image_base_url: String,
}

impl<A: CatalogApi> AppModel<A> {
    pub fn new(api: Arc<A>, image_base_url: impl Into<String>) -> Self {
        Self {
            search: SearchController::new(api.clone()),
            api,
            details: Mutex::new(None),
            ratings: RatingTracker::new(),
            ui_state: Mutex::new(UiState::default()),
            should_quit: Mutex::new(false),
            image_base_url: image_base_url.into(),
        }
    }

    pub fn search(&self) -> &SearchController<A> {
        &self.search
    }

    pub fn ratings(&self) -> &RatingTracker {
        &self.ratings
    }

    // ========================================================================
    // Screens
    // ========================================================================

    /// Enter the details screen with a fresh controller for `id`.
    pub async fn open_details(&self, id: MovieId) -> DetailsController<A> {
        let controller = DetailsController::new(self.api.clone());
        *self.details.lock().await = Some(controller.clone());

        let mut state = self.ui_state.lock().await;
        state.screen = Screen::Details(id);
        state.show_help_popup = false;
        controller
    }

    /// Back to the catalog. The details controller is dropped; an in-flight
    /// fetch finishes into a controller nobody reads any more.
    pub async fn close_details(&self) {
        *self.details.lock().await = None;
        self.ui_state.lock().await.screen = Screen::Catalog;
    }

    pub async fn details_controller(&self) -> Option<DetailsController<A>> {
        self.details.lock().await.clone()
    }

    // ========================================================================
    // Search box and list
    // ========================================================================

    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
        state.search_input.clone()
    }

    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
        state.search_input.clone()
    }

    pub async fn clear_search(&self) {
        self.ui_state.lock().await.search_input.clear();
    }

    pub async fn set_focus(&self, focus: Focus) {
        self.ui_state.lock().await.focus = focus;
    }

    pub async fn toggle_focus(&self) {
        let mut state = self.ui_state.lock().await;
        state.focus = state.focus.toggle();
    }

    pub async fn reset_selection(&self) {
        self.ui_state.lock().await.list_selected = 0;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.list_selected = state.list_selected.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let count = self.search.snapshot().loaded().map_or(0, Vec::len);
        let mut state = self.ui_state.lock().await;
        if state.list_selected + 1 < count {
            state.list_selected += 1;
        }
    }

    pub async fn selected_movie(&self) -> Option<Movie> {
        let index = self.ui_state.lock().await.list_selected;
        self.search
            .snapshot()
            .loaded()
            .and_then(|movies| movies.get(index).cloned())
    }

    // ========================================================================
    // Misc UI flags
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        let mut ui = self.get_ui_state().await;
        let catalog_query = self.search.query().await;
        let catalog = self.search.snapshot();

        // The list may have shrunk since the selection was made
        let count = catalog.loaded().map_or(0, Vec::len);
        if ui.list_selected >= count {
            ui.list_selected = count.saturating_sub(1);
        }

        let details = self.details_controller().await.map(|c| c.snapshot());
        let rating = match ui.screen {
            Screen::Details(id) => self.ratings.get_rating(id).await,
            Screen::Catalog => None,
        };

        AppSnapshot {
            ui,
            catalog_query,
            catalog,
            details,
            rating,
            image_base_url: self.image_base_url.clone(),
        }
    }
}
