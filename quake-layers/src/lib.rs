//! Map layer models and builders for the earthquake map.
//!
//! Turns raw feed features and their display records into a [`MapSpec`]:
//! a plain, serializable description of the tile layer, circle markers,
//! popups, legend and controls. The WASM app hands the spec to Leaflet;
//! the CLI embeds it in a standalone HTML page.
//!
//! # Usage
//!
//! ```rust
//! use quake_feed::feed::FeedDocument;
//! use quake_feed::record::transform;
//! use quake_layers::MapRenderer;
//!
//! let body = r#"{"metadata": {"generated": 1704067200000}, "features": []}"#;
//! let document = FeedDocument::from_json(body).unwrap();
//! let records = transform(&document);
//! let spec = MapRenderer::default().build(&document.features, &records);
//! assert_eq!(spec.marker_count(), 0);
//! ```

pub mod assets;
pub mod config;
pub mod models;
pub mod popup;
mod renderer;

pub use config::MapConfig;
pub use models::MapSpec;
pub use renderer::MapRenderer;
