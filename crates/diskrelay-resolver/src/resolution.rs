use std::fmt::Display;

/// The outcome of resolving a public-share URL.
///
/// Replaces a blanket error catch with an explicit result the caller can
/// map to an HTTP response per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The upstream API produced a direct link to the resource.
    Direct { href: String },
    /// The upstream API refused or returned an unusable body; the caller
    /// should offer manual access through the provider's own public page.
    Fallback { reason: FallbackReason },
}

/// Why a resolution fell back to manual access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The upstream API answered with a non-success status.
    UpstreamStatus(u16),
    /// The response body carried no direct-link field.
    MissingHref,
}

impl Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpstreamStatus(status) => write!(f, "upstream status {}", status),
            Self::MissingHref => f.write_str("response carried no direct link"),
        }
    }
}
