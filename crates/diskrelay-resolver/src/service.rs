use crate::cache::MokaResponseCache;
use crate::error::ResolverError;
use crate::resolution::{FallbackReason, Resolution};
use crate::resolver::ShareResolver;
use crate::upstream::UpstreamClient;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, trace, warn};
use url::Url;

/// The direct-link field of the upstream response body. Everything else
/// in the body is ignored.
#[derive(Debug, Deserialize)]
struct DownloadLink {
    href: Option<String>,
}

/// Service that resolves public-share URLs to direct download links.
///
/// Composes an [`UpstreamClient`] with a [`MokaResponseCache`]: each
/// resolution is keyed by the full upstream request URL, and a fresh cache
/// entry answers without a new network call. Only transport-success
/// responses are stored.
#[derive(Debug, Clone)]
pub struct ResolverService<C> {
    client: C,
    endpoint: Url,
    cache: MokaResponseCache,
}

impl<C: UpstreamClient> ResolverService<C> {
    /// Creates a new `ResolverService` against the given API base URL,
    /// e.g. `https://cloud-api.yandex.net/v1/disk/public`.
    pub fn new(client: C, api_base: &Url, cache: MokaResponseCache) -> Result<Self, ResolverError> {
        let endpoint = Url::parse(&format!(
            "{}/resources/download",
            api_base.as_str().trim_end_matches('/')
        ))
        .map_err(|e| ResolverError::InvalidEndpoint(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            cache,
        })
    }

    /// Resolves a public-share URL to a direct link.
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution::Direct)` - The upstream API produced a direct link
    /// * `Ok(Resolution::Fallback)` - The upstream API refused or returned
    ///   a body without a direct link
    /// * `Err(e)` - The flow itself failed (transport error, timeout)
    pub async fn resolve(&self, public_url: &Url) -> Result<Resolution, ResolverError> {
        ShareResolver::resolve(self, public_url).await
    }

    fn request_url(&self, public_url: &Url) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("public_key", public_url.as_str());
        url
    }
}

#[async_trait]
impl<C: UpstreamClient> ShareResolver for ResolverService<C> {
    async fn resolve(&self, public_url: &Url) -> Result<Resolution, ResolverError> {
        let request_url = self.request_url(public_url);
        trace!(url = %request_url, "resolving public share");

        // Cloned so the single-flight future owns its captures.
        let fetch_url = request_url.clone();
        let fetched = self
            .cache
            .get_or_fetch(request_url.as_str(), move || async move {
                let response = self.client.fetch(&fetch_url).await?;
                if !response.is_success() {
                    warn!(
                        url = %fetch_url,
                        status = response.status,
                        "upstream rejected resolution request"
                    );
                    return Err(ResolverError::UpstreamStatus {
                        status: response.status,
                    });
                }
                Ok(response.body)
            })
            .await;

        let body = match fetched {
            Ok(body) => body,
            Err(ResolverError::UpstreamStatus { status }) => {
                return Ok(Resolution::Fallback {
                    reason: FallbackReason::UpstreamStatus(status),
                });
            }
            Err(other) => return Err(other),
        };

        match serde_json::from_str::<DownloadLink>(&body) {
            Ok(DownloadLink { href: Some(href) }) => {
                debug!(url = %request_url, "resolved direct link");
                Ok(Resolution::Direct { href })
            }
            _ => {
                warn!(url = %request_url, "upstream response carried no direct link");
                Ok(Resolution::Fallback {
                    reason: FallbackReason::MissingHref,
                })
            }
        }
    }
}
