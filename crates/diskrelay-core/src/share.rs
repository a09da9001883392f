use crate::error::ShareError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

/// The kind of access a public share link asks for.
///
/// Maps the single-letter flag of the provider's public URLs:
/// `d` for direct downloads, `i` for inline previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareKind {
    /// Serve the resource as a download (`/d/<token>`).
    Download,
    /// Redirect straight to the resource for inline preview (`/i/<token>`).
    Preview,
}

impl ShareKind {
    /// Parses the single-letter path flag. Returns `None` for anything
    /// other than `d` or `i`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "d" => Some(Self::Download),
            "i" => Some(Self::Preview),
            _ => None,
        }
    }

    /// Returns the path flag used in the provider's public URLs.
    pub fn as_flag(&self) -> &'static str {
        match self {
            Self::Download => "d",
            Self::Preview => "i",
        }
    }
}

impl Display for ShareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// A validated public-share token.
///
/// Tokens are opaque identifiers minted by the provider. They must be
/// non-empty and contain only alphanumeric characters, hyphens, or
/// underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareToken(String);

impl ShareToken {
    /// Creates a new `ShareToken` after validating the input.
    pub fn new(token: impl Into<String>) -> Result<Self, ShareError> {
        let token = token.into();
        Self::validate(&token)?;
        Ok(Self(token))
    }

    /// Creates a `ShareToken` without validation.
    ///
    /// Use this only for tokens from trusted internal sources.
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(token: &str) -> Result<(), ShareError> {
        if token.is_empty() {
            return Err(ShareError::InvalidToken(
                "token must not be empty".to_string(),
            ));
        }

        if !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShareError::InvalidToken(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                token
            )));
        }

        Ok(())
    }
}

impl Display for ShareToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable reference to a publicly shared resource, built once per
/// request from the route and query string.
///
/// A `ShareReference` always carries a validated, non-empty token:
/// requests that fail the token pattern never produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReference {
    kind: ShareKind,
    token: ShareToken,
    resource_key: Option<String>,
    sub_path: Option<String>,
}

impl ShareReference {
    /// Creates a reference to the share itself, without a resource key
    /// or sub-path.
    pub fn new(kind: ShareKind, token: ShareToken) -> Self {
        Self {
            kind,
            token,
            resource_key: None,
            sub_path: None,
        }
    }

    /// Attaches the provider's `resource_key` for shares that require one.
    pub fn with_resource_key(mut self, resource_key: Option<String>) -> Self {
        self.resource_key = resource_key;
        self
    }

    /// Attaches a path selecting a single entry inside a shared folder.
    pub fn with_sub_path(mut self, sub_path: Option<String>) -> Self {
        self.sub_path = sub_path;
        self
    }

    pub fn kind(&self) -> ShareKind {
        self.kind
    }

    pub fn token(&self) -> &ShareToken {
        &self.token
    }

    /// Synthesizes the canonical public-share URL on the provider domain:
    /// `<base>/<d|i>/<token>`, with `resource_key` and `path` appended as
    /// query parameters when present.
    pub fn public_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_path(&format!("{}/{}", self.kind.as_flag(), self.token));

        if self.resource_key.is_some() || self.sub_path.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(resource_key) = &self.resource_key {
                pairs.append_pair("resource_key", resource_key);
            }
            if let Some(sub_path) = &self.sub_path {
                pairs.append_pair("path", sub_path);
            }
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://disk.yandex.com").unwrap()
    }

    #[test]
    fn valid_tokens() {
        assert!(ShareToken::new("a").is_ok());
        assert!(ShareToken::new("Abc-123_xyz").is_ok());
        assert!(ShareToken::new("i0VbVdrKo2fYqV").is_ok());
    }

    #[test]
    fn empty_token_rejected() {
        assert!(ShareToken::new("").is_err());
    }

    #[test]
    fn invalid_characters_rejected() {
        assert!(ShareToken::new("abc def").is_err());
        assert!(ShareToken::new("abc/def").is_err());
        assert!(ShareToken::new("abc.def").is_err());
        assert!(ShareToken::new("abc!").is_err());
    }

    #[test]
    fn kind_from_flag() {
        assert_eq!(ShareKind::from_flag("d"), Some(ShareKind::Download));
        assert_eq!(ShareKind::from_flag("i"), Some(ShareKind::Preview));
        assert_eq!(ShareKind::from_flag("x"), None);
        assert_eq!(ShareKind::from_flag(""), None);
    }

    #[test]
    fn public_url_plain() {
        let share = ShareReference::new(
            ShareKind::Download,
            ShareToken::new("abc123").unwrap(),
        );
        assert_eq!(
            share.public_url(&base()).as_str(),
            "https://disk.yandex.com/d/abc123"
        );
    }

    #[test]
    fn public_url_preview_flag() {
        let share = ShareReference::new(
            ShareKind::Preview,
            ShareToken::new("abc123").unwrap(),
        );
        assert_eq!(
            share.public_url(&base()).as_str(),
            "https://disk.yandex.com/i/abc123"
        );
    }

    #[test]
    fn public_url_with_resource_key() {
        let share = ShareReference::new(
            ShareKind::Download,
            ShareToken::new("abc123").unwrap(),
        )
        .with_resource_key(Some("key-1".to_string()));
        assert_eq!(
            share.public_url(&base()).as_str(),
            "https://disk.yandex.com/d/abc123?resource_key=key-1"
        );
    }

    #[test]
    fn public_url_with_sub_path_is_encoded() {
        let share = ShareReference::new(
            ShareKind::Download,
            ShareToken::new("abc123").unwrap(),
        )
        .with_sub_path(Some("/docs/report.pdf".to_string()));
        assert_eq!(
            share.public_url(&base()).as_str(),
            "https://disk.yandex.com/d/abc123?path=%2Fdocs%2Freport.pdf"
        );
    }

    #[test]
    fn public_url_with_both_parameters() {
        let share = ShareReference::new(
            ShareKind::Download,
            ShareToken::new("abc123").unwrap(),
        )
        .with_resource_key(Some("key-1".to_string()))
        .with_sub_path(Some("/a.txt".to_string()));
        assert_eq!(
            share.public_url(&base()).as_str(),
            "https://disk.yandex.com/d/abc123?resource_key=key-1&path=%2Fa.txt"
        );
    }

    #[test]
    fn public_url_without_parameters_has_no_query() {
        let share = ShareReference::new(
            ShareKind::Download,
            ShareToken::new("abc123").unwrap(),
        );
        assert_eq!(share.public_url(&base()).query(), None);
    }
}
