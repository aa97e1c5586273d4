//! Flattening of feed features into render-ready display records.

use crate::depth::ColorBucket;
use crate::error::TransformError;
use crate::feed::{FeedDocument, Feature};
use log::warn;
use quake_utils::dates::format_calendar_date;
use serde::Serialize;

/// Render-ready projection of a single feature.
///
/// `lat` holds the first coordinate (GeoJSON longitude) and `lon` the
/// second (GeoJSON latitude). The map places markers at `[lon, lat]`
/// in Leaflet's `[lat, lng]` order, so the two swaps cancel out on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    #[serde(rename = "time")]
    pub formatted_time: String,
    pub title: String,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "mag")]
    pub magnitude: f64,
    #[serde(rename = "depth")]
    pub depth_km: f64,
}

impl DisplayRecord {
    pub fn bucket(&self) -> ColorBucket {
        ColorBucket::classify(self.depth_km)
    }
}

impl TryFrom<&Feature> for DisplayRecord {
    type Error = TransformError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        if let Some(reason) = &feature.malformed {
            return Err(TransformError::Malformed(reason.clone()));
        }
        let coordinates = feature
            .geometry
            .as_ref()
            .map(|g| g.coordinates.as_slice())
            .ok_or(TransformError::MissingProperty("geometry"))?;
        if coordinates.len() != 3 {
            return Err(TransformError::BadCoordinates(coordinates.len()));
        }

        let properties = &feature.properties;
        let time = properties
            .time
            .ok_or(TransformError::MissingProperty("time"))?;
        let formatted_time =
            format_calendar_date(time).map_err(|_| TransformError::BadTime(time))?;
        let title = properties
            .title
            .clone()
            .ok_or(TransformError::MissingProperty("title"))?;
        let url = properties
            .url
            .clone()
            .ok_or(TransformError::MissingProperty("url"))?;
        let magnitude = properties
            .mag
            .ok_or(TransformError::MissingProperty("mag"))?;

        Ok(DisplayRecord {
            formatted_time,
            title,
            url,
            lat: coordinates[0],
            lon: coordinates[1],
            magnitude,
            depth_km: coordinates[2],
        })
    }
}

/// Outcome of transforming a whole document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformed {
    pub records: Vec<DisplayRecord>,
    /// Index of each rejected feature and why it was rejected.
    pub skipped: Vec<(usize, TransformError)>,
}

/// Transform every feature, keeping feed order. Malformed features are
/// skipped and reported rather than coerced into default values.
pub fn transform_with_report(document: &FeedDocument) -> Transformed {
    let mut transformed = Transformed {
        records: Vec::with_capacity(document.features.len()),
        skipped: Vec::new(),
    };
    for (index, feature) in document.features.iter().enumerate() {
        match DisplayRecord::try_from(feature) {
            Ok(record) => transformed.records.push(record),
            Err(e) => {
                warn!("Skipping feature {} ({:?}): {}", index, feature.id, e);
                transformed.skipped.push((index, e));
            }
        }
    }
    transformed
}

/// Transform every well-formed feature into a display record.
pub fn transform(document: &FeedDocument) -> Vec<DisplayRecord> {
    transform_with_report(document).records
}
