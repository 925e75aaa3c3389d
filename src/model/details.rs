//! Details controller: loads one movie's full record on demand.
//!
//! Independent of the search controller. Each `load` supersedes any load
//! still in flight; only the latest one may publish.

use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use super::search::Outcome;
use super::tmdb_client::CatalogApi;
use super::types::{MovieDetails, MovieId, RequestToken};
use super::view_state::ViewState;

pub type DetailsState = ViewState<MovieDetails>;

#[derive(Debug)]
#[must_use = "a pending load does nothing until it is resolved"]
pub struct PendingDetails {
    token: RequestToken,
    id: MovieId,
}

impl PendingDetails {
    pub fn id(&self) -> MovieId {
        self.id
    }
}

#[derive(Default)]
struct DetailsInner {
    current_id: Option<MovieId>,
    latest: RequestToken,
}

pub struct DetailsController<A> {
    api: Arc<A>,
    inner: Arc<Mutex<DetailsInner>>,
    state: Arc<watch::Sender<DetailsState>>,
}

impl<A> Clone for DetailsController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            inner: self.inner.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CatalogApi> DetailsController<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            api,
            inner: Arc::new(Mutex::new(DetailsInner::default())),
            state: Arc::new(state),
        }
    }

    pub async fn load(&self, id: MovieId) -> Outcome {
        let pending = self.begin(id).await;
        self.resolve(pending).await
    }

    pub async fn begin(&self, id: MovieId) -> PendingDetails {
        let mut inner = self.inner.lock().await;
        inner.current_id = Some(id);
        inner.latest = inner.latest.next();
        let token = inner.latest;
        self.state.send_replace(ViewState::Loading);
        tracing::debug!(%token, id, "Details request issued");
        PendingDetails { token, id }
    }

    pub async fn resolve(&self, pending: PendingDetails) -> Outcome {
        let result = self.api.fetch_details(pending.id).await;

        let inner = self.inner.lock().await;
        if inner.latest != pending.token {
            tracing::debug!(id = pending.id, current = ?inner.current_id, "Discarding superseded details response");
            return Outcome::Discarded;
        }

        match &result {
            Ok(details) => tracing::info!(id = pending.id, title = %details.title, "Details loaded"),
            Err(e) => tracing::warn!(id = pending.id, error = %e, "Details request failed"),
        }
        self.state.send_replace(ViewState::from_result(result));
        Outcome::Applied
    }

    /// Reload the last requested movie. `None` if nothing was ever loaded.
    pub async fn retry(&self) -> Option<Outcome> {
        let id = self.current_id().await?;
        tracing::debug!(id, "Retrying details request");
        Some(self.load(id).await)
    }

    pub async fn current_id(&self) -> Option<MovieId> {
        self.inner.lock().await.current_id
    }

    pub fn snapshot(&self) -> DetailsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.state.subscribe()
    }
}
