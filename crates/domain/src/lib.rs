//! SiteGate Domain Layer
pub mod access;
pub mod config;
pub mod errors;
pub mod legacy;
pub mod site_key;
pub mod site_state;
pub mod time;
pub mod usage_state;

pub use access::{AccessDecision, AccessReason, UsageVerdict};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use legacy::LegacySites;
pub use site_key::SiteKey;
pub use site_state::{BlockStatus, SiteState, SiteStatePatch};
pub use usage_state::{UsageState, DEFAULT_DAILY_LIMIT_MS};
