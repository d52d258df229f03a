use serde::{Deserialize, Serialize};
use std::fmt;

use crate::site_key::SiteKey;

/// Human-readable reason attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessReason {
    #[serde(rename = "Daily Limit Reached")]
    DailyLimitReached,
    #[serde(rename = "Temporarily Unblocked")]
    TemporarilyUnblocked,
    #[serde(rename = "Site Blocked")]
    SiteBlocked,
    #[serde(rename = "Block Expired")]
    BlockExpired,
}

impl AccessReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessReason::DailyLimitReached => "Daily Limit Reached",
            AccessReason::TemporarilyUnblocked => "Temporarily Unblocked",
            AccessReason::SiteBlocked => "Site Blocked",
            AccessReason::BlockExpired => "Block Expired",
        }
    }
}

impl fmt::Display for AccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of an access check. Denials always carry a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<AccessReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_key: Option<SiteKey>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            site_key: None,
        }
    }

    pub fn allow_with(reason: AccessReason) -> Self {
        Self {
            allowed: true,
            reason: Some(reason),
            site_key: None,
        }
    }

    pub fn deny(reason: AccessReason, site_key: SiteKey) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            site_key: Some(site_key),
        }
    }
}

/// Verdict of a usage report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageVerdict {
    pub allowed: bool,
}

impl UsageVerdict {
    pub fn allow() -> Self {
        Self { allowed: true }
    }

    pub fn deny() -> Self {
        Self { allowed: false }
    }
}
