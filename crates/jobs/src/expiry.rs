use futures::StreamExt;
use sitegate_application::ports::{Clock, ExpiryScheduler};
use sitegate_application::use_cases::ExpireSiteUseCase;
use sitegate_domain::SiteKey;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::time::DelayQueue;
use tracing::{debug, error, info, warn};

type ExpiryRequest = (SiteKey, i64);

/// Longest single delay handed to the timer wheel, which rejects anything
/// past roughly two years. Later deadlines are re-armed in steps.
pub const MAX_ARM_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Creates the scheduling handle given to the admin use cases and the
/// receiving end consumed by [`SiteExpiryJob`].
pub fn expiry_channel(clock: Arc<dyn Clock>) -> (ExpiryQueue, ExpiryRequests) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ExpiryQueue { tx, clock }, ExpiryRequests(rx))
}

/// [`ExpiryScheduler`] that forwards wake-ups to a running [`SiteExpiryJob`].
pub struct ExpiryQueue {
    tx: mpsc::UnboundedSender<ExpiryRequest>,
    clock: Arc<dyn Clock>,
}

pub struct ExpiryRequests(mpsc::UnboundedReceiver<ExpiryRequest>);

impl ExpiryScheduler for ExpiryQueue {
    fn schedule(&self, key: &SiteKey, at_ms: i64) {
        if at_ms == 0 || at_ms <= self.clock.now_ms() {
            debug!(site_key = %key, at_ms, "Ignoring wake-up in the past");
            return;
        }

        if self.tx.send((key.clone(), at_ms)).is_err() {
            warn!(site_key = %key, at_ms, "Expiry job not running, wake-up dropped");
        }
    }
}

/// Holds armed wake-ups in a [`DelayQueue`] and runs
/// [`ExpireSiteUseCase`] for each one as it comes due.
///
/// Wake-ups live in memory only; [`ExpirySweepJob`](crate::ExpirySweepJob)
/// covers whatever was armed before a restart.
pub struct SiteExpiryJob {
    expire: Arc<ExpireSiteUseCase>,
    clock: Arc<dyn Clock>,
    requests: Mutex<Option<ExpiryRequests>>,
    max_delay: Duration,
    shutdown: CancellationToken,
}

impl SiteExpiryJob {
    pub fn new(
        expire: Arc<ExpireSiteUseCase>,
        clock: Arc<dyn Clock>,
        requests: ExpiryRequests,
    ) -> Self {
        Self {
            expire,
            clock,
            requests: Mutex::new(Some(requests)),
            max_delay: MAX_ARM_DELAY,
            shutdown: CancellationToken::new(),
        }
    }

    /// Caps each armed delay; never raised past [`MAX_ARM_DELAY`].
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay.min(MAX_ARM_DELAY);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        let requests = self.requests.lock().ok().and_then(|mut guard| guard.take());
        let Some(ExpiryRequests(mut rx)) = requests else {
            warn!("SiteExpiryJob already started");
            return;
        };

        info!("Starting site expiry job");

        tokio::spawn(async move {
            let mut queue: DelayQueue<ExpiryRequest> = DelayQueue::new();
            let mut accepting = true;

            loop {
                tokio::select! {
                    biased;

                    _ = self.shutdown.cancelled() => {
                        info!(pending = queue.len(), "SiteExpiryJob: shutting down");
                        break;
                    }
                    request = rx.recv(), if accepting => {
                        match request {
                            Some((key, at_ms)) => {
                                let delay = self.delay_until(at_ms);
                                debug!(site_key = %key, at_ms, delay_ms = delay.as_millis() as u64, "Wake-up armed");
                                queue.insert((key, at_ms), delay);
                            }
                            None => accepting = false,
                        }
                    }
                    Some(expired) = queue.next(), if !queue.is_empty() => {
                        let (key, at_ms) = expired.into_inner();
                        if at_ms > self.clock.now_ms() {
                            let delay = self.delay_until(at_ms);
                            debug!(site_key = %key, at_ms, "Wake-up re-armed");
                            queue.insert((key, at_ms), delay);
                            continue;
                        }
                        match self.expire.execute(&key).await {
                            Ok(changed) => debug!(site_key = %key, changed, "Wake-up handled"),
                            Err(e) => error!(site_key = %key, error = %e, "Site expiry failed"),
                        }
                    }
                }
            }
        });
    }

    fn delay_until(&self, at_ms: i64) -> Duration {
        let remaining = at_ms.saturating_sub(self.clock.now_ms());
        Duration::from_millis(u64::try_from(remaining).unwrap_or(0)).min(self.max_delay)
    }
}
