use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds a writer waits on a locked database before the store
    /// operation fails.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Seconds between passive WAL checkpoints. 0 disables the job.
    #[serde(default = "default_wal_checkpoint_interval_secs")]
    pub wal_checkpoint_interval_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            wal_checkpoint_interval_secs: default_wal_checkpoint_interval_secs(),
        }
    }
}

fn default_db_path() -> String {
    "./sitegate.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    30
}

fn default_wal_checkpoint_interval_secs() -> u64 {
    300
}
