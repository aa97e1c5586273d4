//! Browser-side pieces shared by the WASM app and the standalone page.

/// Leaflet script defining `renderQuakeMap` and `destroyQuakeMap`.
pub static QUAKE_MAP_JS: &str = include_str!("../assets/js/quake-map.js");

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const FULLSCREEN_CSS: &str =
    "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.css";
pub const FULLSCREEN_JS: &str = "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.js";
