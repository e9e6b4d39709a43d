//! Application state for the web layer.

use std::sync::Arc;

use crate::service::StationService;
use crate::upstream::UpstreamClient;

/// Shared application state.
///
/// Read-only; every request fetches its own upstream data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Station and schedule lookups
    pub stations: Arc<StationService<UpstreamClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            stations: Arc::new(StationService::new(upstream)),
        }
    }
}
