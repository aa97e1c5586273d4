//! Shared Dioxus components and Leaflet bridge for the earthquake map.
//!
//! This crate provides:
//! - `fetch`: browser feed client over `window.fetch`
//! - `js_bridge`: Rust wrappers for the Leaflet map script via `js_sys::eval()`
//! - `render`: mounting a built `MapSpec` into a viewport
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (container, header, status)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod render;
pub mod state;
