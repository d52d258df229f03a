use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::site_key::SiteKey;

/// Block/override state of one tracked destination.
///
/// All instants are epoch milliseconds; `0` means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteState {
    pub display_name: Arc<str>,
    pub is_blocked: bool,
    pub blocked_until: i64,
    pub unblock_until: i64,
    pub last_changed_at: i64,
}

/// Where a destination stands with respect to its own block policy,
/// ignoring overrides and the shared usage budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Unblocked,
    /// Blocked until the given instant.
    Active { until: i64 },
    /// Blocked with no scheduled expiry.
    Indefinite,
    /// Blocked, but the scheduled expiry has passed.
    Expired,
}

impl BlockStatus {
    pub fn denies_access(&self) -> bool {
        matches!(self, BlockStatus::Active { .. } | BlockStatus::Indefinite)
    }
}

impl SiteState {
    /// Fresh, unblocked record labelled with the key.
    pub fn new(key: &SiteKey) -> Self {
        Self {
            display_name: Arc::from(key.as_str()),
            is_blocked: false,
            blocked_until: 0,
            unblock_until: 0,
            last_changed_at: 0,
        }
    }

    pub fn is_temporarily_unblocked(&self, now: i64) -> bool {
        self.unblock_until > now
    }

    pub fn block_status(&self, now: i64) -> BlockStatus {
        if !self.is_blocked {
            BlockStatus::Unblocked
        } else if self.blocked_until == 0 {
            BlockStatus::Indefinite
        } else if self.blocked_until > now {
            BlockStatus::Active {
                until: self.blocked_until,
            }
        } else {
            BlockStatus::Expired
        }
    }

    pub fn override_expired(&self, now: i64) -> bool {
        self.unblock_until != 0 && self.unblock_until <= now
    }

    /// Overwrites only the fields the patch carries.
    pub fn apply(&mut self, patch: &SiteStatePatch) {
        if let Some(name) = &patch.display_name {
            self.display_name = name.clone();
        }
        if let Some(is_blocked) = patch.is_blocked {
            self.is_blocked = is_blocked;
        }
        if let Some(until) = patch.blocked_until {
            self.blocked_until = until;
        }
        if let Some(until) = patch.unblock_until {
            self.unblock_until = until;
        }
    }
}

/// Partial update for a [`SiteState`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteStatePatch {
    pub display_name: Option<Arc<str>>,
    pub is_blocked: Option<bool>,
    pub blocked_until: Option<i64>,
    pub unblock_until: Option<i64>,
}

impl SiteStatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_block() -> Self {
        Self::new().is_blocked(false).blocked_until(0)
    }

    pub fn clear_override() -> Self {
        Self::new().unblock_until(0)
    }

    pub fn display_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn is_blocked(mut self, blocked: bool) -> Self {
        self.is_blocked = Some(blocked);
        self
    }

    pub fn blocked_until(mut self, until: i64) -> Self {
        self.blocked_until = Some(until);
        self
    }

    pub fn unblock_until(mut self, until: i64) -> Self {
        self.unblock_until = Some(until);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
