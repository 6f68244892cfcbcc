use tracing::info;

use crate::services::store::DocStore;

/// Outcome of the one-shot store initialization. Terminal for the process
/// lifetime: a failed handle is never retried, a ready handle is never
/// rebuilt.
#[derive(Debug)]
pub enum StoreState {
    Ready(DocStore),
    Failed(String),
}

impl StoreState {
    pub fn is_ready(&self) -> bool {
        matches!(self, StoreState::Ready(_))
    }

    /// Readiness label for logging.
    pub fn readiness(&self) -> &'static str {
        match self {
            StoreState::Ready(_) => "ready",
            StoreState::Failed(_) => "failed",
        }
    }
}

/// Application state shared across requests. Needs to be thread-safe.
///
/// Constructed exactly once at startup, after initialization has settled,
/// and treated as immutable for the remainder of the process. Handlers only
/// read from it, so no locking is required.
pub struct AppState {
    /// The document store handle, or the reason it could not be built.
    pub store: StoreState,
}

impl AppState {
    pub fn new(store: StoreState) -> Self {
        info!(
            store = store.readiness(),
            "Initializing application state"
        );
        Self { store }
    }
}
