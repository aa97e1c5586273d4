//! Standalone HTML export of the earthquake map.
//!
//! The page loads Leaflet from a CDN and runs the same map script the
//! WASM app uses, fed with the same serialized `MapSpec`.

use log::info;
use quake_feed::feed::FeedDocument;
use quake_feed::record::transform_with_report;
use quake_layers::assets::{FULLSCREEN_CSS, FULLSCREEN_JS, LEAFLET_CSS, LEAFLET_JS, QUAKE_MAP_JS};
use quake_layers::{MapRenderer, MapSpec};
use quake_utils::html::escape;

const MAP_ID: &str = "map";

/// Transform, build and print the page on stdout.
pub fn run_page(document: &FeedDocument, title: &str) -> anyhow::Result<()> {
    let transformed = transform_with_report(document);
    let spec = MapRenderer::default().build(&document.features, &transformed.records);
    info!(
        "Rendering page with {} markers ({} skipped)",
        spec.marker_count(),
        transformed.skipped.len()
    );
    println!("{}", standalone_html(&spec, title)?);
    Ok(())
}

/// A complete HTML document that mounts `spec` on load.
pub fn standalone_html(spec: &MapSpec, title: &str) -> anyhow::Result<String> {
    // `</` would close the inline script early.
    let spec_json = serde_json::to_string(spec)?.replace("</", "<\\/");
    let title = escape(title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}">
<link rel="stylesheet" href="{FULLSCREEN_CSS}">
<style>
  body {{ margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
  #{MAP_ID} {{ height: 100vh; }}
  .legend {{ background: white; padding: 6px; border-radius: 4px; }}
  .legend ul {{ margin: 0; padding: 0; }}
</style>
</head>
<body>
<div id="{MAP_ID}"></div>
<script src="{LEAFLET_JS}"></script>
<script src="{FULLSCREEN_JS}"></script>
<script>
{QUAKE_MAP_JS}
renderQuakeMap('{MAP_ID}', {spec_json});
</script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quake_feed::record::transform;

    const FEED_JSON: &str = r#"{
        "metadata": {"generated": 1704067200000},
        "features": [
            {"type": "Feature",
             "properties": {"mag": 5.2, "place": "south of the Fiji Islands", "time": 1703980800000,
                            "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us1",
                            "title": "M 5.2 - </script><b>Fiji</b>"},
             "geometry": {"type": "Point", "coordinates": [178.1, -25.4, 560.2]}}
        ]
    }"#;

    #[test]
    fn test_standalone_html() {
        let document = FeedDocument::from_json(FEED_JSON).unwrap();
        let records = transform(&document);
        let spec = MapRenderer::default().build(&document.features, &records);
        let html = standalone_html(&spec, "Quakes & more").unwrap();

        assert!(html.contains("<title>Quakes &amp; more</title>"));
        assert!(html.contains("function renderQuakeMap"));
        assert!(html.contains(&format!("<script src=\"{}\"></script>", LEAFLET_JS)));
        assert!(html.contains(&format!("<link rel=\"stylesheet\" href=\"{}\">", FULLSCREEN_CSS)));
        assert!(html.contains("renderQuakeMap('map', {"));
        assert!(html.contains("\"radius\":93600.0"));
        assert!(html.contains("\"fillColor\":\"red\""));
        // Only the page's own closing script tags remain.
        assert_eq!(html.matches("</script>").count(), 3);
    }

    #[test]
    fn test_empty_feed_page() {
        let spec = MapRenderer::default().build(&[], &[]);
        let html = standalone_html(&spec, "Empty").unwrap();
        assert!(html.contains("\"markers\":[]"));
        assert!(html.contains("\"scale\":true"));
    }
}
