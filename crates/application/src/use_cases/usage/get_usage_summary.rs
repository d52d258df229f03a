use sitegate_domain::{DomainError, UsageState};
use std::sync::Arc;

use crate::services::UsageLedger;

pub struct GetUsageSummaryUseCase {
    ledger: Arc<UsageLedger>,
}

impl GetUsageSummaryUseCase {
    pub fn new(ledger: Arc<UsageLedger>) -> Self {
        Self { ledger }
    }

    pub async fn execute(&self) -> Result<UsageState, DomainError> {
        self.ledger.get_usage_state().await
    }
}
