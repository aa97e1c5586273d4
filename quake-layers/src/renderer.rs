use crate::config::MapConfig;
use crate::models::{
    CircleMarker, CircleOptions, ControlsSpec, LayerControlSpec, LegendSpec, MapSpec,
    MarkerLayerSpec, PopupFeature, PopupLayerSpec, TileLayerSpec, ViewSpec,
};
use crate::popup::{feature_popup, legend_html, record_popup};
use log::info;
use quake_feed::depth::ColorBucket;
use quake_feed::feed::Feature;
use quake_feed::record::DisplayRecord;

/// Builds the full map description from raw features and display records.
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    config: MapConfig,
}

impl MapRenderer {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    /// Radius in meters. Linear in magnitude and deliberately unclamped:
    /// a negative magnitude yields a negative radius.
    pub fn radius(&self, magnitude: f64) -> f64 {
        magnitude * self.config.radius_scale
    }

    pub fn circle_marker(&self, record: &DisplayRecord) -> CircleMarker {
        CircleMarker {
            center: [record.lon, record.lat],
            options: CircleOptions {
                fill_opacity: self.config.fill_opacity,
                color: self.config.outline_color.clone(),
                weight: self.config.outline_weight,
                fill_color: ColorBucket::classify(record.depth_km).css_color().to_string(),
                radius: self.radius(record.magnitude),
            },
            popup_html: record_popup(record),
        }
    }

    /// Assemble every layer and control. Pure: nothing is mounted here.
    pub fn build(&self, raw_features: &[Feature], records: &[DisplayRecord]) -> MapSpec {
        let config = &self.config;

        let popup_features = raw_features
            .iter()
            .filter(|f| has_point(f))
            .map(|f| PopupFeature {
                feature: f.clone(),
                popup_html: feature_popup(f),
            })
            .collect::<Vec<PopupFeature>>();

        let markers = records
            .iter()
            .map(|r| self.circle_marker(r))
            .collect::<Vec<CircleMarker>>();

        info!(
            "Built map spec: {} markers, {} popup features",
            markers.len(),
            popup_features.len()
        );

        MapSpec {
            view: ViewSpec {
                center: config.center,
                zoom: config.zoom,
                fullscreen_control: config.fullscreen_control,
            },
            base_layer: TileLayerSpec {
                name: config.base_layer_name.clone(),
                url_template: config.tile_url_template.clone(),
                attribution: config.tile_attribution.clone(),
            },
            overlay: MarkerLayerSpec {
                name: config.overlay_name.clone(),
                markers,
            },
            popup_layer: PopupLayerSpec {
                name: config.popup_layer_name.clone(),
                features: popup_features,
            },
            legend: LegendSpec {
                position: config.legend_position.clone(),
                html: legend_html(),
            },
            controls: ControlsSpec {
                scale: true,
                layers: LayerControlSpec {
                    collapsed: config.layers_collapsed,
                    base_layers: vec![config.base_layer_name.clone()],
                    overlays: vec![
                        config.overlay_name.clone(),
                        config.popup_layer_name.clone(),
                    ],
                },
            },
        }
    }
}

/// Leaflet needs at least `[lng, lat]` to place a GeoJSON point.
fn has_point(feature: &Feature) -> bool {
    feature
        .geometry
        .as_ref()
        .map(|g| g.coordinates.len() >= 2)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quake_feed::feed::{FeedDocument, Metadata, Properties};
    use quake_feed::record::transform;

    fn feature(coordinates: Vec<f64>, mag: f64) -> Feature {
        Feature::point(
            coordinates,
            Properties {
                time: Some(1_704_067_200_000),
                title: Some(format!("M {}", mag)),
                place: Some("Somewhere".to_string()),
                url: Some("https://earthquake.usgs.gov/earthquakes/eventpage/x".to_string()),
                mag: Some(mag),
            },
        )
    }

    fn document(features: Vec<Feature>) -> FeedDocument {
        FeedDocument {
            metadata: Metadata {
                generated: 1_704_067_200_000,
                title: None,
                count: None,
            },
            features,
        }
    }

    #[test]
    fn test_radius_formula() {
        let renderer = MapRenderer::default();
        assert_eq!(renderer.radius(5.2), 93600.0);
        assert_eq!(renderer.radius(3.0), 54000.0);
        assert_eq!(renderer.radius(0.0), 0.0);
        assert_eq!(renderer.radius(-1.0), -18000.0);
    }

    #[test]
    fn test_single_feature_marker() {
        let doc = document(vec![feature(vec![-110.0, 40.0, 45.0], 3.0)]);
        let records = transform(&doc);
        let spec = MapRenderer::default().build(&doc.features, &records);

        assert_eq!(spec.marker_count(), 1);
        let marker = &spec.overlay.markers[0];
        assert_eq!(marker.center, [40.0, -110.0]);
        assert_eq!(marker.options.fill_color, "yellow");
        assert_eq!(marker.options.radius, 54000.0);
        assert_eq!(marker.options.fill_opacity, 0.7);
        assert_eq!(marker.options.color, "black");
        assert_eq!(marker.options.weight, 0.5);
        assert_eq!(spec.popup_layer.features.len(), 1);
    }

    #[test]
    fn test_empty_feed_still_has_map_furniture() {
        let spec = MapRenderer::default().build(&[], &[]);
        assert_eq!(spec.marker_count(), 0);
        assert!(spec.popup_layer.features.is_empty());
        assert_eq!(spec.base_layer.name, "OpenStreet");
        assert_eq!(
            spec.base_layer.url_template,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert_eq!(spec.legend.html.matches("<li").count(), 6);
        assert_eq!(spec.legend.position, "topright");
        assert!(spec.controls.scale);
        assert!(spec.controls.layers.collapsed);
        assert_eq!(spec.controls.layers.base_layers, vec!["OpenStreet"]);
        assert_eq!(
            spec.controls.layers.overlays,
            vec!["Earthquakes", "Event Locations"]
        );
        assert_eq!(spec.view.center, [40.0, -110.0]);
        assert_eq!(spec.view.zoom, 5);
        assert!(spec.view.fullscreen_control);
    }

    #[test]
    fn test_markers_follow_record_order() {
        let doc = document(vec![
            feature(vec![1.0, 2.0, 5.0], 1.0),
            feature(vec![3.0, 4.0, 95.0], 2.0),
            feature(vec![5.0, 6.0, 60.0], 3.0),
        ]);
        let records = transform(&doc);
        let spec = MapRenderer::default().build(&doc.features, &records);
        let colors: Vec<&str> = spec
            .overlay
            .markers
            .iter()
            .map(|m| m.options.fill_color.as_str())
            .collect();
        assert_eq!(colors, ["blue", "red", "orange"]);
    }

    #[test]
    fn test_popup_layer_skips_features_without_point() {
        let mut no_geometry = feature(vec![], 1.0);
        no_geometry.geometry = None;
        let features = vec![no_geometry, feature(vec![1.0], 1.0), feature(vec![1.0, 2.0], 1.0)];
        let spec = MapRenderer::default().build(&features, &[]);
        assert_eq!(spec.popup_layer.features.len(), 1);
    }

    #[test]
    fn test_custom_config() {
        let config = MapConfig {
            radius_scale: 1000.0,
            zoom: 3,
            ..MapConfig::default()
        };
        let renderer = MapRenderer::new(config);
        assert_eq!(renderer.radius(2.5), 2500.0);
        assert_eq!(renderer.build(&[], &[]).view.zoom, 3);
    }

    #[test]
    fn test_spec_json_shape() {
        let doc = document(vec![feature(vec![-110.0, 40.0, 45.0], 3.0)]);
        let records = transform(&doc);
        let spec = MapRenderer::default().build(&doc.features, &records);
        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["overlay"]["markers"][0]["options"]["fillColor"], "yellow");
        assert_eq!(value["overlay"]["markers"][0]["options"]["fillOpacity"], 0.7);
        assert_eq!(value["baseLayer"]["urlTemplate"], spec.base_layer.url_template);
        assert_eq!(value["view"]["fullscreenControl"], true);
        let legend_keys: Vec<&String> = value["legend"].as_object().unwrap().keys().collect();
        assert_eq!(legend_keys, ["html", "position"]);
        assert_eq!(
            value["popupLayer"]["features"][0]["feature"]["geometry"]["type"],
            "Point"
        );
    }
}
