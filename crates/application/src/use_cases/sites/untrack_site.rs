use sitegate_domain::{DomainError, SiteKey};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::SiteRegistry;

pub struct UntrackSiteUseCase {
    registry: Arc<SiteRegistry>,
}

impl UntrackSiteUseCase {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self { registry }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, host: &str) -> Result<(), DomainError> {
        let key = SiteKey::parse(host)?;
        if !self.registry.remove(&key).await? {
            return Err(DomainError::SiteNotTracked(key.to_string()));
        }
        info!(site_key = %key, "Site untracked");
        Ok(())
    }
}
