//! Application state for the web layer.

use std::sync::Arc;

use crate::generator::SimulatedProvider;
use crate::stations::StationCatalog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Source of journeys and departure boards
    pub provider: Arc<SimulatedProvider>,

    /// Stations known to the planner, shared with the provider
    pub catalog: Arc<StationCatalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Arc<StationCatalog>, provider: SimulatedProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            catalog,
        }
    }
}
