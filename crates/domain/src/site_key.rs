use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::errors::DomainError;

/// Normalized identity of a tracked destination.
///
/// Derived from the host of a URL: lower-cased and IDNA-encoded by the URL
/// parser, with a single leading `www.` label removed. Every read and write
/// path builds keys through [`SiteKey::from_url`] or [`SiteKey::parse`], so
/// both sides always agree on the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteKey(Arc<str>);

impl SiteKey {
    /// Builds a key from a full URL such as `https://www.youtube.com/watch?v=1`.
    pub fn from_url(raw: &str) -> Result<Self, DomainError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", raw, e)))?;
        let host = url
            .host_str()
            .ok_or_else(|| DomainError::InvalidUrl(format!("{}: missing host", raw)))?;
        Self::from_host(host).map_err(|_| DomainError::InvalidUrl(raw.to_string()))
    }

    /// Builds a key from a bare host such as `WWW.YouTube.com`.
    pub fn parse(host: &str) -> Result<Self, DomainError> {
        let host = host.trim();
        if host.is_empty()
            || host
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | ':'))
        {
            return Err(DomainError::InvalidSiteKey(host.to_string()));
        }

        Self::from_url(&format!("http://{}/", host))
            .map_err(|_| DomainError::InvalidSiteKey(host.to_string()))
    }

    fn from_host(host: &str) -> Result<Self, DomainError> {
        let key = host.strip_prefix("www.").unwrap_or(host);
        if key.is_empty() {
            return Err(DomainError::InvalidSiteKey(host.to_string()));
        }
        Ok(Self(Arc::from(key)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
