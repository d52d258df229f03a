use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid site key: {0}")]
    InvalidSiteKey(String),

    #[error("Site is not tracked: {0}")]
    SiteNotTracked(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid daily limit: {0}")]
    InvalidDailyLimit(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
