//! Search, navigation, retry and rating actions

use std::sync::atomic::Ordering;

use crate::model::{CatalogApi, Focus, MovieId, Screen, ViewState};
use super::AppController;

impl<A: CatalogApi> AppController<A> {
    /// Kick off the popular list; called once at startup.
    pub async fn load_initial_catalog(&self) {
        self.search_now(String::new()).await;
    }

    /// Search after the input has been quiet for the debounce window.
    pub fn schedule_search(&self, query: String) {
        let generation = self.edit_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();

        tokio::spawn(async move {
            tokio::time::sleep(controller.debounce).await;
            if controller.edit_generation.load(Ordering::SeqCst) != generation {
                tracing::trace!(query = %query, "Debounced search superseded by newer input");
                return;
            }
            controller.start_search(query).await;
        });
    }

    /// Search right away, dropping any debounced search still waiting.
    /// The request token is taken before returning, so key order decides
    /// which response is shown.
    pub async fn search_now(&self, query: String) {
        self.edit_generation.fetch_add(1, Ordering::SeqCst);
        self.start_search(query).await;
    }

    async fn start_search(&self, query: String) {
        let search = self.model.search().clone();
        let pending = search.begin(query).await;
        self.model.reset_selection().await;
        tokio::spawn(async move {
            search.resolve(pending).await;
        });
    }

    pub async fn open_selected(&self) {
        if let Some(movie) = self.model.selected_movie().await {
            tracing::debug!(id = movie.id, title = %movie.title, "Opening details");
            self.open_details(movie.id).await;
        }
    }

    pub async fn open_details(&self, id: MovieId) {
        let details = self.model.open_details(id).await;
        tokio::spawn(async move {
            details.load(id).await;
        });
    }

    pub async fn close_details(&self) {
        self.model.close_details().await;
        self.model.set_focus(Focus::List).await;
    }

    /// Re-run whatever failed on the current screen, if it may succeed.
    pub async fn retry(&self) {
        match self.model.get_ui_state().await.screen {
            Screen::Catalog => {
                let search = self.model.search().clone();
                if !search.snapshot().is_retryable_error() {
                    return;
                }
                tokio::spawn(async move {
                    search.retry().await;
                });
            }
            Screen::Details(_) => {
                let Some(details) = self.model.details_controller().await else {
                    return;
                };
                if !details.snapshot().is_retryable_error() {
                    return;
                }
                tokio::spawn(async move {
                    details.retry().await;
                });
            }
        }
    }

    /// Rate the movie on the details screen. Out-of-range values cannot come
    /// from the key map, so a rejection is only logged.
    pub async fn rate_current(&self, value: i64) {
        let Screen::Details(id) = self.model.get_ui_state().await.screen else {
            return;
        };
        let Some(details) = self.model.details_controller().await else {
            return;
        };
        if !matches!(details.snapshot(), ViewState::Loaded(d) if d.id == id) {
            tracing::debug!(id, value, "Ignoring rating until details are loaded");
            return;
        }
        if let Err(e) = self.model.ratings().rate(id, value).await {
            tracing::warn!(id, value, error = %e, "Rating rejected");
        }
    }
}
