//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the item service and its record store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use holocron_lib::{ItemService, RecordStore};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. Every clone refers to the same store.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use holocron_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let items = state.items().get_all();
///     // ... use items
/// }
///
/// let app = Router::new()
///     .route("/items/getAll", get(handler))
///     .with_state(AppState::seeded());
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    items: ItemService,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state backed by a freshly seeded store.
    pub fn seeded() -> Self {
        let state = Self::from_store(RecordStore::seeded());
        tracing::info!(
            item_count = state.items().len(),
            "record store seeded"
        );
        state
    }

    /// Create state from a pre-built store.
    ///
    /// This is useful for testing with custom fixtures.
    pub fn from_store(store: RecordStore) -> Self {
        Self::from_service(ItemService::new(store))
    }

    pub fn from_service(items: ItemService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                items,
                started_at: Utc::now(),
            }),
        }
    }

    /// Access the item service.
    pub fn items(&self) -> &ItemService {
        &self.inner.items
    }

    /// When this state was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("item_count", &self.inner.items.len())
            .field("started_at", &self.inner.started_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_seeded() {
        let state = AppState::seeded();
        assert_eq!(state.items().len(), 8);
    }

    #[test]
    fn test_app_state_clone_shares_store() {
        let state1 = AppState::seeded();
        let state2 = state1.clone();

        state1.items().delete_by_id(1).unwrap();
        assert_eq!(state2.items().len(), 7);
        assert_eq!(state1.started_at(), state2.started_at());
    }

    #[test]
    fn test_app_state_instances_are_isolated() {
        let state1 = AppState::seeded();
        let state2 = AppState::seeded();

        state1.items().delete_by_id(1).unwrap();
        assert_eq!(state2.items().len(), 8);
    }

    #[test]
    fn test_app_state_from_empty_store() {
        let state = AppState::from_store(RecordStore::new());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_app_state_debug() {
        let debug = format!("{:?}", AppState::seeded());
        assert!(debug.contains("AppState"));
        assert!(debug.contains("item_count"));
        assert!(debug.contains("started_at"));
    }
}
