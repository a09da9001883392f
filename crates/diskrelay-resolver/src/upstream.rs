use crate::error::ResolverError;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Type alias for upstream results.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// A raw response from the upstream resolution API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// Transport status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl UpstreamResponse {
    /// Whether the transport status indicates success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound transport to the provider's resolution API.
///
/// A transport-level failure (connect error, timeout) is an `Err`; an HTTP
/// error status is a normal [`UpstreamResponse`] for the caller to inspect.
#[async_trait]
pub trait UpstreamClient: Send + Sync + 'static {
    async fn fetch(&self, url: &Url) -> Result<UpstreamResponse>;
}

/// Production [`UpstreamClient`] backed by a shared [`reqwest::Client`].
///
/// Carries an explicit request timeout so a stalled provider cannot pin
/// request tasks indefinitely.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: reqwest::Client,
}

impl HttpUpstreamClient {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolverError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch(&self, url: &Url) -> Result<UpstreamResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}
