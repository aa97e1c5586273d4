use crate::error::FeedError;
use log::info;
use quake_utils::dates::format_calendar_date;
use serde::{Deserialize, Deserializer, Serialize};

/// USGS summary feed: all earthquakes from the past seven days.
pub const FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// A GeoJSON FeatureCollection as served by the USGS summary feed.
///
/// Only the fields the map needs are modelled; everything else in the
/// document is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub metadata: Metadata,
    #[serde(deserialize_with = "deserialize_features")]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Generation time in epoch milliseconds.
    pub generated: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// One seismic event.
///
/// Each feature is deserialized on its own: one that does not fit this
/// shape keeps its place in the document with `malformed` set, and is
/// rejected by the transformer instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Properties,
    /// Why this feature could not be deserialized, if it could not.
    #[serde(skip)]
    pub malformed: Option<String>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// Point geometry: `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

fn point_type() -> String {
    "Point".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Event time in epoch milliseconds.
    pub time: Option<i64>,
    pub title: Option<String>,
    pub place: Option<String>,
    pub url: Option<String>,
    pub mag: Option<f64>,
}

fn deserialize_features<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(Feature::from_value).collect())
}

impl FeedDocument {
    /// Parse a feed response body.
    pub fn from_json(body: &str) -> Result<FeedDocument, FeedError> {
        let document: FeedDocument =
            serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;
        info!(
            "Parsed feed {} with {} features (generated {})",
            document.metadata.title.as_deref().unwrap_or("<untitled>"),
            document.features.len(),
            document.metadata.generated
        );
        Ok(document)
    }

    /// The feed generation date as an en-US calendar date in UTC.
    pub fn generated_date(&self) -> Option<String> {
        format_calendar_date(self.metadata.generated).ok()
    }
}

impl Feature {
    /// Deserialize one feature, keeping a placeholder if it is malformed.
    pub fn from_value(value: serde_json::Value) -> Feature {
        let id = value
            .get("id")
            .and_then(|id| id.as_str())
            .map(str::to_string);
        match serde_json::from_value::<Feature>(value) {
            Ok(feature) => feature,
            Err(e) => Feature {
                kind: feature_type(),
                id,
                geometry: None,
                properties: Properties::default(),
                malformed: Some(e.to_string()),
            },
        }
    }

    /// Build a point feature, mostly useful for fixtures.
    pub fn point(coordinates: Vec<f64>, properties: Properties) -> Feature {
        Feature {
            kind: feature_type(),
            id: None,
            geometry: Some(Geometry {
                kind: point_type(),
                coordinates,
            }),
            properties,
            malformed: None,
        }
    }
}
