//! Loading state exposed to the rendering layer

use super::error::CatalogError;

/// Exactly one tag is active at a time. `Idle` only precedes the first fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error { message: String, retryable: bool },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn from_error(error: &CatalogError) -> Self {
        ViewState::Error {
            message: error.user_message(),
            retryable: error.is_retryable(),
        }
    }

    pub fn from_result(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(payload) => ViewState::Loaded(payload),
            Err(e) => ViewState::from_error(&e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_retryable_error(&self) -> bool {
        matches!(self, ViewState::Error { retryable: true, .. })
    }

    /// Short tag name, for logs
    pub fn tag(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_retryable() {
        let state: ViewState<()> = ViewState::from_result(Err(CatalogError::NotFound { id: 42 }));
        assert!(matches!(state, ViewState::Error { retryable: false, .. }));
        assert!(!state.is_retryable_error());
    }

    #[test]
    fn success_is_loaded() {
        let state = ViewState::from_result(Ok(vec![1, 2]));
        assert_eq!(state.loaded(), Some(&vec![1, 2]));
        assert_eq!(state.tag(), "loaded");
    }
}
