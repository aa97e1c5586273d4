//! Reusable Dioxus RSX components for the earthquake map.

mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
