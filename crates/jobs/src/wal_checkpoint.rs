use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub struct WalCheckpointJob {
    pool: SqlitePool,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl WalCheckpointJob {
    pub fn new(pool: SqlitePool, interval_secs: u64) -> Self {
        Self {
            pool,
            interval_secs: interval_secs.max(1),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting WAL checkpoint job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // skip the immediate first tick; nothing to checkpoint at boot
            interval.tick().await;
            loop {
                tokio::select! {
                    biased;

                    _ = self.shutdown.cancelled() => {
                        info!("WalCheckpointJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match sqlx::query("PRAGMA wal_checkpoint(PASSIVE)")
                            .execute(&self.pool)
                            .await
                        {
                            Ok(_) => debug!("WAL passive checkpoint completed"),
                            Err(e) => error!(error = %e, "WAL checkpoint failed"),
                        }
                    }
                }
            }
        });
    }
}
