use std::collections::BTreeSet;

use crate::errors::DomainError;
use crate::site_key::SiteKey;

pub const DEFAULT_LEGACY_SITES: [&str; 3] = ["x.com", "youtube.com", "twitter.com"];

/// Destinations that were hard-blocked before usage budgets existed.
///
/// One set drives both the stale-block correction and the auto-registration
/// of first-seen destinations, so the two behaviours cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacySites {
    sites: BTreeSet<SiteKey>,
}

impl LegacySites {
    pub fn from_hosts<S: AsRef<str>>(hosts: &[S]) -> Result<Self, DomainError> {
        let sites = hosts
            .iter()
            .map(|h| SiteKey::parse(h.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { sites })
    }

    pub fn empty() -> Self {
        Self {
            sites: BTreeSet::new(),
        }
    }

    pub fn contains(&self, key: &SiteKey) -> bool {
        self.sites.contains(key)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }
}

impl Default for LegacySites {
    fn default() -> Self {
        Self::from_hosts(&DEFAULT_LEGACY_SITES).unwrap_or_else(|_| Self::empty())
    }
}
