pub mod site_state_repository;
pub mod usage_state_repository;

pub use site_state_repository::SqliteSiteStateRepository;
pub use usage_state_repository::SqliteUsageStateRepository;
