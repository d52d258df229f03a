use async_trait::async_trait;
use sitegate_application::ports::UsageStateRepository;
use sitegate_domain::{DomainError, UsageState};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type UsageRow = (i64, i64, i64, i64);

/// The usage record is a singleton row with `id = 1`.
pub struct SqliteUsageStateRepository {
    pool: SqlitePool,
}

impl SqliteUsageStateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// SQLite integers are signed; counters never get near i64::MAX in practice.
fn to_db(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_db(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[async_trait]
impl UsageStateRepository for SqliteUsageStateRepository {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Option<UsageState>, DomainError> {
        let row = sqlx::query_as::<_, UsageRow>(
            "SELECT global_usage, daily_limit_ms, next_reset, last_updated
             FROM usage_state WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load usage state");
            DomainError::Store(e.to_string())
        })?;

        Ok(row.map(
            |(global_usage, daily_limit_ms, next_reset, last_updated)| UsageState {
                global_usage: from_db(global_usage),
                daily_limit_ms: from_db(daily_limit_ms),
                next_reset,
                last_updated,
            },
        ))
    }

    #[instrument(skip(self))]
    async fn save(&self, state: &UsageState) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO usage_state (id, global_usage, daily_limit_ms, next_reset, last_updated)
             VALUES (1, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                global_usage = excluded.global_usage,
                daily_limit_ms = excluded.daily_limit_ms,
                next_reset = excluded.next_reset,
                last_updated = excluded.last_updated",
        )
        .bind(to_db(state.global_usage))
        .bind(to_db(state.daily_limit_ms))
        .bind(state.next_reset)
        .bind(state.last_updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save usage state");
            DomainError::Store(e.to_string())
        })?;

        Ok(())
    }
}
