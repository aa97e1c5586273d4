//! Earthquakes of the past seven days
//!
//! Plots every event from the USGS weekly summary feed as a circle sized
//! by magnitude and colored by depth, with a depth legend, scale bar and
//! layer control.
//!
//! Data flow:
//! 1. On mount, the GeoJSON feed is fetched once through `window.fetch`.
//! 2. A fetch failure stops here: only the error is shown, no map.
//! 3. Features are transformed into display records; malformed ones are
//!    skipped and counted.
//! 4. Once the map container is in the DOM, the layers are built and
//!    handed to Leaflet. If Leaflet fails to draw them, the error replaces
//!    the map. The map is never refreshed afterwards.

use dioxus::prelude::*;
use quake_feed::feed::{Feature, FEED_URL};
use quake_feed::record::{transform_with_report, DisplayRecord};
use quake_map_ui::components::{ErrorDisplay, LoadingSpinner, MapContainer, MapHeader};
use quake_map_ui::fetch::fetch_feed;
use quake_map_ui::render::{render, wait_for_mount, ViewportHandle};
use quake_map_ui::state::AppState;

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "quake-map";

/// Raw features plus their display records, ready to render.
#[derive(Clone, PartialEq)]
struct Loaded {
    features: Vec<Feature>,
    records: Vec<DisplayRecord>,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("quake-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let loaded = use_signal(|| None::<Loaded>);

    // Fetch and transform once per page load
    use_future(move || load_feed(state, loaded));

    // Render the map after data loaded
    use_effect(move || {
        let mut state = state;
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let data = match &*loaded.read() {
            Some(data) => data.clone(),
            None => return,
        };

        match render(&data.features, &data.records, &ViewportHandle::new(MAP_ID)) {
            Ok(mounted) => {
                state.marker_count.set(mounted.marker_count);
                spawn(async move {
                    if let Err(e) = wait_for_mount(&mounted).await {
                        state.error_msg.set(Some(e.to_string()));
                    }
                });
            }
            Err(e) => {
                log::error!("{}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapHeader {
                title: "USGS All Earthquakes, Past Seven Days".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    feed_url: FEED_URL.to_string(),
                }
            } else if (state.loading)() {
                LoadingSpinner {
                    feed_url: FEED_URL.to_string(),
                }
            } else {
                MapContainer {
                    id: MAP_ID.to_string(),
                }
            }
        }
    }
}

async fn load_feed(mut state: AppState, mut loaded: Signal<Option<Loaded>>) {
    let document = match fetch_feed(FEED_URL).await {
        Ok(document) => document,
        Err(e) => {
            log::error!("Failed to fetch feed: {}", e);
            state.error_msg.set(Some(e.to_string()));
            state.loading.set(false);
            return;
        }
    };

    let transformed = transform_with_report(&document);
    log::info!(
        "Transformed {} of {} features",
        transformed.records.len(),
        document.features.len()
    );

    state.generated.set(document.generated_date());
    state.skipped_count.set(transformed.skipped.len());
    state.marker_count.set(transformed.records.len());
    loaded.set(Some(Loaded {
        features: document.features,
        records: transformed.records,
    }));
    state.loading.set(false);
}
