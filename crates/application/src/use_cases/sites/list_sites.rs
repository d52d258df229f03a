use sitegate_domain::{DomainError, SiteKey, SiteState};
use std::sync::Arc;

use crate::services::SiteRegistry;

pub struct ListSitesUseCase {
    registry: Arc<SiteRegistry>,
}

impl ListSitesUseCase {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self { registry }
    }

    /// Tracked sites ordered by key.
    pub async fn execute(&self) -> Result<Vec<(SiteKey, SiteState)>, DomainError> {
        let mut sites = self.registry.list().await?;
        sites.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(sites)
    }
}
