//! Native feed client.

use crate::error::FeedError;
use crate::feed::FeedDocument;
use log::{info, warn};
use reqwest::Client;

/// Issues a single GET against a GeoJSON feed endpoint.
///
/// There is no retry: any failure is returned to the caller, which must
/// not go on to transform or render anything.
#[derive(Debug, Clone, Default)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<FeedDocument, FeedError> {
        info!("Fetching feed {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request failed for {}: {}", url, e);
            FeedError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", url, status);
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body for {}: {}", url, e);
            FeedError::Network(e.to_string())
        })?;
        FeedDocument::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::test::FEED_JSON;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/all_week.geojson", addr)
    }

    fn local_client() -> FeedClient {
        FeedClient::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let url = serve_once("200 OK", FEED_JSON).await;
        let document = local_client().fetch(&url).await.unwrap();
        assert_eq!(document.features.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let result = local_client().fetch(&url).await;
        assert_eq!(result, Err(FeedError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", "{\"features\": 3}").await;
        let result = local_client().fetch(&url).await;
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Bind then drop to get a port nobody is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let result = local_client()
            .fetch(&format!("http://{}/feed.geojson", addr))
            .await;
        assert!(matches!(result, Err(FeedError::Network(_))));
    }
}
