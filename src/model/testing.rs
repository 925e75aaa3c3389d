//! In-memory catalog double for controller tests

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

use super::error::{CatalogError, Result};
use super::tmdb_client::CatalogApi;
use super::types::{Movie, MovieDetails, MovieId};

/// A call the double received, for assertions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Popular,
    Search(String),
    Details(MovieId),
}

/// Key used to hold a response until the test releases it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKey {
    Popular,
    Search(String),
    Details(MovieId),
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    popular: Option<Result<Vec<Movie>>>,
    searches: HashMap<String, Result<Vec<Movie>>>,
    details: HashMap<MovieId, Result<MovieDetails>>,
    gates: HashMap<GateKey, oneshot::Receiver<()>>,
}

#[derive(Clone, Default)]
pub struct MockCatalog {
    state: Arc<Mutex<MockState>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_popular(&self, result: Result<Vec<Movie>>) {
        self.state.lock().await.popular = Some(result);
    }

    pub async fn set_search(&self, query: &str, result: Result<Vec<Movie>>) {
        self.state.lock().await.searches.insert(query.to_string(), result);
    }

    pub async fn set_details(&self, id: MovieId, result: Result<MovieDetails>) {
        self.state.lock().await.details.insert(id, result);
    }

    /// Hold the next matching call until the returned sender fires (or drops).
    pub async fn gate(&self, key: GateKey) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().await.gates.insert(key, rx);
        tx
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.state.lock().await.calls.clone()
    }

    async fn record(&self, call: Call, key: GateKey) {
        let gate = {
            let mut state = self.state.lock().await;
            state.calls.push(call);
            state.gates.remove(&key)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

impl CatalogApi for MockCatalog {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        self.record(Call::Popular, GateKey::Popular).await;
        self.state
            .lock()
            .await
            .popular
            .clone()
            .unwrap_or_else(|| Err(CatalogError::network("no popular response configured")))
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        self.record(Call::Search(query.to_string()), GateKey::Search(query.to_string()))
            .await;
        self.state
            .lock()
            .await
            .searches
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.record(Call::Details(id), GateKey::Details(id)).await;
        self.state
            .lock()
            .await
            .details
            .get(&id)
            .cloned()
            .unwrap_or(Err(CatalogError::NotFound { id }))
    }
}

pub fn movie(id: MovieId, title: &str) -> Movie {
    Movie {
        id,
        poster_path: Some(format!("/{}.jpg", title.to_lowercase())),
        title: title.to_string(),
    }
}

pub fn details(id: MovieId, title: &str) -> MovieDetails {
    MovieDetails {
        id,
        poster_path: None,
        title: title.to_string(),
        overview: format!("About {}", title),
        release_date: "2001-01-01".to_string(),
        genres: Vec::new(),
    }
}
