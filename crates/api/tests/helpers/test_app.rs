#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sitegate_api::{create_api_routes, AccessUseCases, AppState, SiteUseCases, UsageUseCases};
use sitegate_application::ports::{Clock, NoopExpiryScheduler};
use sitegate_application::services::{SiteRegistry, UsageLedger};
use sitegate_application::use_cases::{
    BlockSiteUseCase, CheckAccessUseCase, GetSiteStatusUseCase, GetUsageSummaryUseCase,
    ListSitesUseCase, ReportUsageUseCase, SetDailyLimitUseCase, TemporaryUnblockUseCase,
    TrackSiteUseCase, UntrackSiteUseCase,
};
use sitegate_domain::{LegacySites, DEFAULT_DAILY_LIMIT_MS};
use sitegate_infrastructure::database::create_memory_pool;
use sitegate_infrastructure::repositories::{
    SqliteSiteStateRepository, SqliteUsageStateRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

/// 2026-10-16T12:00:00Z
pub const NOW: i64 = 1_792_152_000_000;
pub const DAY_MS: i64 = 86_400_000;

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }

    fn next_midnight_after(&self, now_ms: i64) -> i64 {
        (now_ms.div_euclid(DAY_MS) + 1) * DAY_MS
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_api_key(None).await
    }

    pub async fn with_api_key(api_key: Option<&str>) -> Self {
        let pool = create_memory_pool().await.unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(NOW));
        let scheduler = Arc::new(NoopExpiryScheduler);

        let registry = Arc::new(SiteRegistry::new(
            Arc::new(SqliteSiteStateRepository::new(pool.clone())),
            clock.clone(),
        ));
        let ledger = Arc::new(UsageLedger::new(
            Arc::new(SqliteUsageStateRepository::new(pool.clone())),
            clock.clone(),
            DEFAULT_DAILY_LIMIT_MS,
        ));

        let state = AppState {
            access: AccessUseCases {
                check_access: Arc::new(CheckAccessUseCase::new(
                    registry.clone(),
                    ledger.clone(),
                    Arc::new(LegacySites::default()),
                    clock.clone(),
                )),
                report_usage: Arc::new(ReportUsageUseCase::new(
                    registry.clone(),
                    ledger.clone(),
                )),
            },
            sites: SiteUseCases {
                track: Arc::new(TrackSiteUseCase::new(registry.clone())),
                untrack: Arc::new(UntrackSiteUseCase::new(registry.clone())),
                block: Arc::new(BlockSiteUseCase::new(
                    registry.clone(),
                    scheduler.clone(),
                    clock.clone(),
                )),
                temporary_unblock: Arc::new(TemporaryUnblockUseCase::new(
                    registry.clone(),
                    scheduler,
                    clock.clone(),
                )),
                get_status: Arc::new(GetSiteStatusUseCase::new(
                    registry.clone(),
                    ledger.clone(),
                )),
                list: Arc::new(ListSitesUseCase::new(registry)),
            },
            usage: UsageUseCases {
                get_summary: Arc::new(GetUsageSummaryUseCase::new(ledger.clone())),
                set_daily_limit: Arc::new(SetDailyLimitUseCase::new(ledger)),
            },
            api_key: api_key.map(Arc::from),
        };

        Self {
            router: create_api_routes(state),
            pool,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn track(&self, host: &str) {
        let (status, _) = self
            .put_json(&format!("/sites/{}", host), serde_json::json!({}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    /// Seeds today's usage directly in the store.
    pub async fn set_usage(&self, global_usage: i64) {
        sqlx::query(
            "INSERT INTO usage_state (id, global_usage, daily_limit_ms, next_reset, last_updated)
             VALUES (1, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET global_usage = excluded.global_usage",
        )
        .bind(global_usage)
        .bind(DEFAULT_DAILY_LIMIT_MS as i64)
        .bind((NOW.div_euclid(DAY_MS) + 1) * DAY_MS)
        .bind(NOW)
        .execute(&self.pool)
        .await
        .unwrap();
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
