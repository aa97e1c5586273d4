//! Serializable map description handed to the Leaflet bridge as JSON.
//!
//! Field names are camelCase so the JS side can pass option objects
//! straight through to `L.circle`, `L.tileLayer` and `L.map`.

use quake_feed::feed::Feature;
use serde::Serialize;

/// Everything needed to mount one map, in mount order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSpec {
    pub view: ViewSpec,
    pub base_layer: TileLayerSpec,
    pub overlay: MarkerLayerSpec,
    pub popup_layer: PopupLayerSpec,
    pub legend: LegendSpec,
    pub controls: ControlsSpec,
}

impl MapSpec {
    pub fn marker_count(&self) -> usize {
        self.overlay.markers.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub fullscreen_control: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerSpec {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
}

/// The overlay group holding one circle per display record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayerSpec {
    pub name: String,
    pub markers: Vec<CircleMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    /// `[lat, lng]` as Leaflet expects it.
    pub center: [f64; 2],
    pub options: CircleOptions,
    pub popup_html: String,
}

/// Leaflet path options for `L.circle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    pub fill_opacity: f64,
    pub color: String,
    pub weight: f64,
    pub fill_color: String,
    /// Meters.
    pub radius: f64,
}

/// Raw GeoJSON features, each with its own popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupLayerSpec {
    pub name: String,
    pub features: Vec<PopupFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupFeature {
    pub feature: Feature,
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub position: String,
    /// Pre-rendered inner HTML for the legend control.
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsSpec {
    pub scale: bool,
    pub layers: LayerControlSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerControlSpec {
    pub collapsed: bool,
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
}
