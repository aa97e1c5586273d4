//! Browser feed client.

use log::{info, warn};
use quake_feed::error::FeedError;
use quake_feed::feed::FeedDocument;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch and parse the feed with a single CORS GET. No retry.
pub async fn fetch_feed(url: &str) -> Result<FeedDocument, FeedError> {
    info!("Fetching feed {}", url);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FeedError::Network(describe(e)))?;

    let window =
        web_sys::window().ok_or_else(|| FeedError::Network("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            let msg = describe(e);
            warn!("Request failed for {}: {}", url, msg);
            FeedError::Network(msg)
        })?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FeedError::Network(describe(e)))?;

    if !response.ok() {
        warn!("Bad response status for {}: {}", url, response.status());
        return Err(FeedError::HttpStatus(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| FeedError::Network(describe(e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| FeedError::Network(describe(e)))?
        .as_string()
        .ok_or_else(|| FeedError::Parse("response body is not text".to_string()))?;

    FeedDocument::from_json(&body)
}
