//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet mounts into
    pub id: String,
    /// Height in pixels; Leaflet needs an explicit height
    #[props(default = 600)]
    pub height: u32,
}

/// A sized div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
