use sitegate_application::use_cases::ExpireSiteUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Periodically clears every elapsed block and override window. The first
/// pass runs immediately, which picks up deadlines that passed while the
/// service was down.
pub struct ExpirySweepJob {
    expire: Arc<ExpireSiteUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ExpirySweepJob {
    pub fn new(expire: Arc<ExpireSiteUseCase>) -> Self {
        Self {
            expire,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting expiry sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    biased;

                    _ = self.shutdown.cancelled() => {
                        info!("ExpirySweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.expire.execute_all().await {
                            Ok(0) => debug!("Expiry sweep found nothing to clear"),
                            Ok(changed) => info!(changed, "Expiry sweep cleared elapsed windows"),
                            Err(e) => error!(error = %e, "Expiry sweep failed"),
                        }
                    }
                }
            }
        });
    }
}
