use async_trait::async_trait;
use sitegate_domain::{DomainError, UsageState};

#[async_trait]
pub trait UsageStateRepository: Send + Sync {
    /// Raw stored record. Callers go through `UsageLedger`, which applies
    /// the daily reset before handing the record out.
    async fn load(&self) -> Result<Option<UsageState>, DomainError>;

    async fn save(&self, state: &UsageState) -> Result<(), DomainError>;
}
