//! Search controller: owns the current query and publishes the catalog
//! view-state.
//!
//! Every query change mints a new [`RequestToken`]. When a fetch completes,
//! its result is published only if its token is still the latest one, so the
//! catalog always reflects the most recently requested query no matter in
//! which order the responses arrive. Superseded fetches are not cancelled,
//! they just run to completion and get dropped.
//!
//! The controller does not debounce: callers coalesce keystrokes before
//! calling [`SearchController::on_query_changed`].

use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use super::tmdb_client::CatalogApi;
use super::types::{Movie, RequestToken};
use super::view_state::ViewState;

pub type CatalogState = ViewState<Vec<Movie>>;

/// What happened to a completed fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The result was published.
    Applied,
    /// A newer request was issued meanwhile; the result was dropped.
    Discarded,
}

/// A request that has been issued (token minted, `Loading` published) but
/// whose fetch has not run yet
#[derive(Debug)]
#[must_use = "a pending search does nothing until it is resolved"]
pub struct PendingSearch {
    token: RequestToken,
    query: String,
}

impl PendingSearch {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Default)]
struct SearchInner {
    query: String,
    latest: RequestToken,
}

pub struct SearchController<A> {
    api: Arc<A>,
    inner: Arc<Mutex<SearchInner>>,
    state: Arc<watch::Sender<CatalogState>>,
}

impl<A> Clone for SearchController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            inner: self.inner.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CatalogApi> SearchController<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            api,
            inner: Arc::new(Mutex::new(SearchInner::default())),
            state: Arc::new(state),
        }
    }

    /// Issue a fetch for `query` and wait for it. Returns whether the result
    /// made it into the view-state.
    pub async fn on_query_changed(&self, query: impl Into<String>) -> Outcome {
        let pending = self.begin(query).await;
        self.resolve(pending).await
    }

    /// Store the query, mint a token and switch to `Loading`.
    pub async fn begin(&self, query: impl Into<String>) -> PendingSearch {
        let query = query.into();
        let mut inner = self.inner.lock().await;
        inner.query = query.clone();
        inner.latest = inner.latest.next();
        let token = inner.latest;
        self.state.send_replace(ViewState::Loading);
        tracing::debug!(%token, query = %query, "Catalog request issued");
        PendingSearch { token, query }
    }

    /// Run the fetch for a pending request and publish it unless superseded.
    /// An empty query means the popular list.
    pub async fn resolve(&self, pending: PendingSearch) -> Outcome {
        let result = if pending.query.is_empty() {
            self.api.fetch_popular().await
        } else {
            self.api.search_movies(&pending.query).await
        };

        // Check and publish under the same lock so a newer `begin` cannot
        // interleave between them.
        let inner = self.inner.lock().await;
        if inner.latest != pending.token {
            tracing::debug!(
                token = %pending.token,
                latest = %inner.latest,
                query = %pending.query,
                "Discarding superseded catalog response"
            );
            return Outcome::Discarded;
        }

        match &result {
            Ok(movies) => tracing::info!(query = %pending.query, count = movies.len(), "Catalog loaded"),
            Err(e) => tracing::warn!(query = %pending.query, error = %e, "Catalog request failed"),
        }
        self.state.send_replace(ViewState::from_result(result));
        Outcome::Applied
    }

    /// Re-issue the current query.
    pub async fn retry(&self) -> Outcome {
        let query = self.query().await;
        tracing::debug!(query = %query, "Retrying catalog request");
        self.on_query_changed(query).await
    }

    pub async fn query(&self) -> String {
        self.inner.lock().await.query.clone()
    }

    pub async fn latest_token(&self) -> RequestToken {
        self.inner.lock().await.latest
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }
}
