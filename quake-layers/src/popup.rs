//! Popup and legend markup.

use quake_feed::depth::ColorBucket;
use quake_feed::feed::Feature;
use quake_feed::record::DisplayRecord;
use quake_utils::dates::format_event_time;
use quake_utils::html::escape;

/// Popup for a circle marker: title, date, magnitude, depth and a link to
/// the USGS event page.
pub fn record_popup(record: &DisplayRecord) -> String {
    format!(
        concat!(
            "<h6 style=\"font-weight: bold;\">{title}</h6> <hr> ",
            "<p>Date: {time} UTC</p> ",
            "<p>Magnitude: {mag} ml</p> ",
            "<p>Depth: {depth} km</p> ",
            "<a href=\"{url}\" target=\"_blank\">More details...</a>"
        ),
        title = escape(&record.title),
        time = escape(&record.formatted_time),
        mag = record.magnitude,
        depth = record.depth_km,
        url = escape(&record.url),
    )
}

/// Popup for a raw feed feature: place name and event time.
pub fn feature_popup(feature: &Feature) -> String {
    let place = feature
        .properties
        .place
        .as_deref()
        .unwrap_or("Unknown location");
    let time = feature
        .properties
        .time
        .and_then(|t| format_event_time(t).ok())
        .unwrap_or_else(|| "Unknown time".to_string());
    format!(
        "<h3> {} </h3> <hr> <p> {} </p>",
        escape(place),
        escape(&time)
    )
}

/// Legend body: a header row followed by one colored row per bucket.
pub fn legend_html() -> String {
    let mut rows = vec![
        "<div style='background-color: lightblue'><strong>&nbsp;&nbsp;Depth (km)&nbsp;&nbsp;</strong></div>"
            .to_string(),
    ];
    for bucket in ColorBucket::ALL {
        rows.push(format!(
            "<li class=\"circle\" style=\"background-color:{}\">{}</li> ",
            bucket.css_color(),
            escape(bucket.legend_label())
        ));
    }
    format!(
        "<ul style=\"list-style-type:none; text-align: center\">{}</ul>",
        rows.join("")
    )
}
