//! Feed or map failure notice.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Feed the map was built from, linked so the raw document can be checked
    pub feed_url: String,
}

/// Shown instead of the map: a failed fetch never leaves a partial map.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load earthquakes: " }
            "{props.message}"
            p {
                style: "margin: 8px 0 0 0; font-size: 12px;",
                "Reload the page to try again, or open the "
                a {
                    href: "{props.feed_url}",
                    target: "_blank",
                    "USGS feed"
                }
                " directly."
            }
        }
    }
}
