pub mod database;
pub mod errors;
pub mod legacy;
pub mod logging;
pub mod root;
pub mod scheduler;
pub mod server;
pub mod usage;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use legacy::LegacyConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use scheduler::SchedulerConfig;
pub use server::ServerConfig;
pub use usage::UsageConfig;
