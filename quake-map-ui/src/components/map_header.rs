//! Map header with title and feed summary.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    pub title: String,
}

/// Title plus the feed generation date and marker count once loaded.
#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let generated = (state.generated)();
    let markers = (state.marker_count)();
    let skipped = (state.skipped_count)();

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if let Some(date) = generated {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Feed generated {date} UTC - {markers} earthquakes"
                    if skipped > 0 {
                        " ({skipped} malformed events skipped)"
                    }
                }
            }
        }
    }
}
