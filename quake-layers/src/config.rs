//! Fixed map settings, passed explicitly to the renderer.

use serde::Serialize;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Marker radius in meters per unit of magnitude.
pub const RADIUS_SCALE: f64 = 18000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub tile_url_template: String,
    pub tile_attribution: String,
    /// Layer control label for the tile layer.
    pub base_layer_name: String,
    /// Layer control label for the circle markers.
    pub overlay_name: String,
    /// Layer control label for the per-feature popup layer.
    pub popup_layer_name: String,
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub radius_scale: f64,
    pub fill_opacity: f64,
    pub outline_color: String,
    pub outline_weight: f64,
    pub fullscreen_control: bool,
    pub legend_position: String,
    pub layers_collapsed: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),
            base_layer_name: "OpenStreet".to_string(),
            overlay_name: "Earthquakes".to_string(),
            popup_layer_name: "Event Locations".to_string(),
            center: [40.0, -110.0],
            zoom: 5,
            radius_scale: RADIUS_SCALE,
            fill_opacity: 0.7,
            outline_color: "black".to_string(),
            outline_weight: 0.5,
            fullscreen_control: true,
            legend_position: "topright".to_string(),
            layers_collapsed: true,
        }
    }
}
