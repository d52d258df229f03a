use async_trait::async_trait;
use sitegate_application::ports::SiteStateRepository;
use sitegate_domain::{DomainError, SiteKey, SiteState};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type SiteRow = (String, String, i64, i64, i64, i64);

const SITE_SELECT: &str =
    "SELECT site_key, display_name, is_blocked, blocked_until, unblock_until, last_changed_at
     FROM sites";

pub struct SqliteSiteStateRepository {
    pool: SqlitePool,
}

impl SqliteSiteStateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_state(row: &SiteRow) -> SiteState {
        let (_, display_name, is_blocked, blocked_until, unblock_until, last_changed_at) = row;

        SiteState {
            display_name: Arc::from(display_name.as_str()),
            is_blocked: *is_blocked != 0,
            blocked_until: *blocked_until,
            unblock_until: *unblock_until,
            last_changed_at: *last_changed_at,
        }
    }
}

#[async_trait]
impl SiteStateRepository for SqliteSiteStateRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &SiteKey) -> Result<Option<SiteState>, DomainError> {
        let row = sqlx::query_as::<_, SiteRow>(&format!("{} WHERE site_key = ?", SITE_SELECT))
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query site state");
                DomainError::Store(e.to_string())
            })?;

        Ok(row.as_ref().map(Self::row_to_state))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<(SiteKey, SiteState)>, DomainError> {
        let rows = sqlx::query_as::<_, SiteRow>(&format!("{} ORDER BY site_key", SITE_SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query site states");
                DomainError::Store(e.to_string())
            })?;

        let mut sites = Vec::with_capacity(rows.len());
        for row in &rows {
            match SiteKey::parse(&row.0) {
                Ok(key) => sites.push((key, Self::row_to_state(row))),
                Err(e) => error!(site_key = %row.0, error = %e, "Skipping unreadable site row"),
            }
        }
        Ok(sites)
    }

    #[instrument(skip(self, state))]
    async fn save(&self, key: &SiteKey, state: &SiteState) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO sites
                (site_key, display_name, is_blocked, blocked_until, unblock_until, last_changed_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(site_key) DO UPDATE SET
                display_name = excluded.display_name,
                is_blocked = excluded.is_blocked,
                blocked_until = excluded.blocked_until,
                unblock_until = excluded.unblock_until,
                last_changed_at = excluded.last_changed_at",
        )
        .bind(key.as_str())
        .bind(state.display_name.as_ref())
        .bind(state.is_blocked as i64)
        .bind(state.blocked_until)
        .bind(state.unblock_until)
        .bind(state.last_changed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save site state");
            DomainError::Store(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &SiteKey) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sites WHERE site_key = ?")
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete site state");
                DomainError::Store(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
