pub mod expiry;
pub mod expiry_sweep;
pub mod runner;
pub mod wal_checkpoint;

pub use expiry::{expiry_channel, ExpiryQueue, ExpiryRequests, SiteExpiryJob, MAX_ARM_DELAY};
pub use expiry_sweep::ExpirySweepJob;
pub use runner::JobRunner;
pub use wal_checkpoint::WalCheckpointJob;
