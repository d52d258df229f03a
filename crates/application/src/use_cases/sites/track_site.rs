use sitegate_domain::{DomainError, SiteKey, SiteState, SiteStatePatch};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::SiteRegistry;

pub struct TrackSiteUseCase {
    registry: Arc<SiteRegistry>,
}

impl TrackSiteUseCase {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self { registry }
    }

    /// Brings `host` under tracking, or renames it if already tracked.
    /// Existing block and override windows are kept.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        host: &str,
        display_name: Option<String>,
    ) -> Result<(SiteKey, SiteState), DomainError> {
        let key = SiteKey::parse(host)?;

        let mut patch = SiteStatePatch::new();
        if let Some(name) = display_name.filter(|n| !n.trim().is_empty()) {
            patch = patch.display_name(name.trim());
        }

        let state = self.registry.set(&key, patch).await?;
        info!(site_key = %key, display_name = %state.display_name, "Site tracked");
        Ok((key, state))
    }
}
