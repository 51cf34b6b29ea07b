//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! holds the parsed fixture document. It is read-only after startup.

use std::sync::Arc;

use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
}

impl AppState {
    #[must_use]
    pub fn new(content: ContentStore) -> Self {
        Self { content: Arc::new(content) }
    }
}
