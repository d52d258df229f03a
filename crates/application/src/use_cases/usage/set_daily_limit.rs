use sitegate_domain::{DomainError, UsageState};
use std::sync::Arc;
use tracing::instrument;

use crate::services::UsageLedger;

pub struct SetDailyLimitUseCase {
    ledger: Arc<UsageLedger>,
}

impl SetDailyLimitUseCase {
    pub fn new(ledger: Arc<UsageLedger>) -> Self {
        Self { ledger }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, daily_limit_ms: u64) -> Result<UsageState, DomainError> {
        self.ledger.set_daily_limit(daily_limit_ms).await
    }
}
