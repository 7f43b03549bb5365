//! Chart binary downloads.

use crate::network::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::future::Future;

/// Why a chart download failed. Every variant is recoverable.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with something other than 200.
    Status(u16),
    /// Connection, TLS or body read failure.
    Transport(String),
    /// No response within the configured timeout.
    Timeout,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Timeout => write!(f, "Chart download timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of raw `.osu` chart bytes, addressed by beatmap id.
pub trait ChartSource: Send + Sync {
    fn fetch_chart(&self, chart_id: u32) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Downloads charts over HTTP from `{base_url}/{chart_id}`.
#[derive(Debug, Clone)]
pub struct HttpChartSource {
    client: Client,
    base_url: String,
}

impl HttpChartSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn chart_url(&self, chart_id: u32) -> String {
        format!("{}/{}", self.base_url, chart_id)
    }
}

impl ChartSource for HttpChartSource {
    async fn fetch_chart(&self, chart_id: u32) -> Result<Vec<u8>, FetchError> {
        let url = self.chart_url(chart_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        log::debug!("CHART: Downloaded {} ({} bytes)", url, bytes.len());

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_chart_url() {
        let source = HttpChartSource::new("https://osu.ppy.sh/osu/").unwrap();
        assert_eq!(source.chart_url(129891), "https://osu.ppy.sh/osu/129891");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Nothing listens on the discard port.
        let source = HttpChartSource::new("http://127.0.0.1:9/osu").unwrap();
        let err = source.fetch_chart(1).await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_downloads_chart_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/osu/75"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"osu file format v14".to_vec()))
            .mount(&server)
            .await;

        let source = HttpChartSource::new(format!("{}/osu", server.uri())).unwrap();
        let bytes = source.fetch_chart(75).await.unwrap();

        assert_eq!(bytes, b"osu file format v14");
    }

    #[tokio::test]
    async fn test_non_ok_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/osu/1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/osu/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let source = HttpChartSource::new(format!("{}/osu", server.uri())).unwrap();

        assert_eq!(source.fetch_chart(1).await, Err(FetchError::Status(404)));
        assert_eq!(source.fetch_chart(2).await, Err(FetchError::Status(204)));
    }
}
