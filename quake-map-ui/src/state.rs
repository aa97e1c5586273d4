//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared application state for the earthquake map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the feed is still being fetched
    pub loading: Signal<bool>,
    /// Error message if the fetch or mount failed
    pub error_msg: Signal<Option<String>>,
    /// Feed generation date ("M/D/YYYY", UTC)
    pub generated: Signal<Option<String>>,
    /// Number of markers on the map
    pub marker_count: Signal<usize>,
    /// Number of features dropped as malformed
    pub skipped_count: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            generated: Signal::new(None),
            marker_count: Signal::new(0),
            skipped_count: Signal::new(0),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
