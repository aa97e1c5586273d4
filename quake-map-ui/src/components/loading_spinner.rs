use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Feed being fetched; only its host is shown
    pub feed_url: String,
}

/// "https://host/path" -> "host"
fn host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split('/').next().unwrap_or(rest)
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let source = host(&props.feed_url).to_string();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; color: #666;",
            div { "Fetching this week's earthquakes..." }
            div {
                style: "font-size: 12px; margin-top: 4px;",
                "from {source}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::host;

    #[test]
    fn test_host() {
        assert_eq!(
            host("https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson"),
            "earthquake.usgs.gov"
        );
        assert_eq!(host("localhost:8080/feed"), "localhost:8080");
    }
}
