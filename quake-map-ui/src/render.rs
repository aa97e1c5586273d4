//! Mounting a built map into the page.

use crate::js_bridge::{self, MountStatus, MAX_POLLS};
use log::{error, info};
use quake_feed::feed::Feature;
use quake_feed::record::DisplayRecord;
use quake_layers::{MapRenderer, MapSpec};
use std::fmt;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// The DOM element a map is mounted into.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportHandle {
    pub container_id: String,
}

impl ViewportHandle {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }
}

/// A map whose render has been scheduled with Leaflet.
///
/// Returned before Leaflet has drawn anything; [`wait_for_mount`]
/// resolves once the map is actually on screen or has failed.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedMap {
    pub container_id: String,
    pub marker_count: usize,
}

/// Failures while handing the map to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    Serialize(String),
    Mount(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Serialize(msg) => write!(f, "failed to serialize map: {}", msg),
            MapError::Mount(msg) => write!(f, "failed to mount map: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

/// Build the map with the default configuration and mount it.
pub fn render(
    raw_features: &[Feature],
    records: &[DisplayRecord],
    target: &ViewportHandle,
) -> Result<MountedMap, MapError> {
    let spec = MapRenderer::default().build(raw_features, records);
    mount(&spec, target)
}

/// Schedule mounting an already built map. The map is static once mounted.
pub fn mount(spec: &MapSpec, target: &ViewportHandle) -> Result<MountedMap, MapError> {
    let spec_json = serde_json::to_string(spec).map_err(|e| MapError::Serialize(e.to_string()))?;

    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Mount("no document to mount into".to_string()))?;

    js_bridge::init_map_scripts()
        .and_then(|_| js_bridge::render_quake_map(&target.container_id, &spec_json))
        .map_err(|e| {
            error!("Failed to schedule map render: {}", e);
            MapError::Mount(e)
        })?;

    info!(
        "Scheduled map into #{} with {} markers",
        target.container_id,
        spec.marker_count()
    );
    Ok(MountedMap {
        container_id: target.container_id.clone(),
        marker_count: spec.marker_count(),
    })
}

/// Resolve after `millis` via `setTimeout`.
async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        } else {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Wait until Leaflet has drawn the scheduled map, or report why it did not.
pub async fn wait_for_mount(mounted: &MountedMap) -> Result<(), MapError> {
    // Outlasts both bounded polls in the bridge scripts.
    for _ in 0..(2 * MAX_POLLS + 10) {
        match js_bridge::mount_status(&mounted.container_id) {
            MountStatus::Mounted => {
                info!(
                    "Mounted map into #{} with {} markers",
                    mounted.container_id, mounted.marker_count
                );
                return Ok(());
            }
            MountStatus::Failed(e) => {
                error!("Map mount failed: {}", e);
                return Err(MapError::Mount(e));
            }
            MountStatus::Pending => sleep(100).await,
        }
    }
    Err(MapError::Mount(format!(
        "timed out waiting for #{}",
        mounted.container_id
    )))
}
