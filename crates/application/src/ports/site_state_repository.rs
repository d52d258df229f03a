use async_trait::async_trait;
use sitegate_domain::{DomainError, SiteKey, SiteState};

#[async_trait]
pub trait SiteStateRepository: Send + Sync {
    async fn get(&self, key: &SiteKey) -> Result<Option<SiteState>, DomainError>;

    async fn get_all(&self) -> Result<Vec<(SiteKey, SiteState)>, DomainError>;

    /// Replaces the whole record for `key`, creating it if needed.
    async fn save(&self, key: &SiteKey, state: &SiteState) -> Result<(), DomainError>;

    /// Returns `false` when no record existed.
    async fn delete(&self, key: &SiteKey) -> Result<bool, DomainError>;
}
