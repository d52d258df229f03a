mod clock;
mod expiry_scheduler;
mod site_state_repository;
mod usage_state_repository;

pub use clock::Clock;
pub use expiry_scheduler::{ExpiryScheduler, NoopExpiryScheduler};
pub use site_state_repository::SiteStateRepository;
pub use usage_state_repository::UsageStateRepository;
