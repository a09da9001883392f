use thiserror::Error;

/// Errors produced by the resolution flow.
///
/// `Clone` is required so failures can cross the cache's single-flight
/// boundary, where they are shared between coalesced waiters.
#[derive(Debug, Clone, Error)]
pub enum ResolverError {
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid resolution endpoint: {0}")]
    InvalidEndpoint(String),
}
