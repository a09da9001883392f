//! Token-to-download-link resolution with response caching.
//!
//! This crate provides a [`ResolverService`] that turns a public-share URL
//! into a direct download link by calling the provider's resolution API.
//! Responses are cached in memory for a short freshness window, keyed by
//! the full upstream request URL, so repeated requests for the same share
//! do not hit the provider again.
//!
//! # Example
//!
//! ```rust,no_run
//! use diskrelay_resolver::{
//!     HttpUpstreamClient, MokaResponseCache, Resolution, ResolverService,
//! };
//! use std::time::Duration;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpUpstreamClient::new(Duration::from_secs(10))?;
//! let cache = MokaResponseCache::with_ttl(10_000, Duration::from_secs(60));
//! let api_base = Url::parse("https://cloud-api.yandex.net/v1/disk/public")?;
//! let service = ResolverService::new(client, &api_base, cache)?;
//!
//! let share = Url::parse("https://disk.yandex.com/d/abc123")?;
//! match service.resolve(&share).await? {
//!     Resolution::Direct { href } => println!("download from {}", href),
//!     Resolution::Fallback { reason } => println!("manual access: {}", reason),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod resolution;
pub mod resolver;
pub mod service;
pub mod upstream;

pub use cache::MokaResponseCache;
pub use error::ResolverError;
pub use resolution::{FallbackReason, Resolution};
pub use resolver::ShareResolver;
pub use service::ResolverService;
pub use upstream::{HttpUpstreamClient, UpstreamClient, UpstreamResponse};
