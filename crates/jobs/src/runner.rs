use crate::{ExpirySweepJob, SiteExpiryJob, WalCheckpointJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(SiteExpiryJob);
impl_spawnable_job!(ExpirySweepJob);
impl_spawnable_job!(WalCheckpointJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

#[derive(Default)]
pub struct JobRunner {
    site_expiry: Option<SiteExpiryJob>,
    expiry_sweep: Option<ExpirySweepJob>,
    wal_checkpoint: Option<WalCheckpointJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_expiry(mut self, job: SiteExpiryJob) -> Self {
        self.site_expiry = Some(job);
        self
    }

    pub fn with_expiry_sweep(mut self, job: ExpirySweepJob) -> Self {
        self.expiry_sweep = Some(job);
        self
    }

    pub fn with_wal_checkpoint(mut self, job: WalCheckpointJob) -> Self {
        self.wal_checkpoint = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.site_expiry, &self.shutdown);
        spawn_job(self.expiry_sweep, &self.shutdown);
        spawn_job(self.wal_checkpoint, &self.shutdown);

        info!("All background jobs started");
    }
}
