use crate::error::ResolverError;
use crate::resolution::Resolution;
use async_trait::async_trait;
use url::Url;

/// The seam between the HTTP surface and the resolution flow.
#[async_trait]
pub trait ShareResolver: Send + Sync + 'static {
    /// Resolves a public-share URL to a direct link, or to an instruction
    /// to fall back to the provider's own public page.
    ///
    /// An `Err` means the flow itself failed (transport error, timeout);
    /// an upstream refusal is a normal [`Resolution::Fallback`].
    async fn resolve(&self, public_url: &Url) -> Result<Resolution, ResolverError>;
}
