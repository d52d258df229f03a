use super::Repositories;
use sitegate_api::{AccessUseCases, AppState, SiteUseCases, UsageUseCases};
use sitegate_application::ports::{Clock, ExpiryScheduler};
use sitegate_application::services::{SiteRegistry, UsageLedger};
use sitegate_application::use_cases::{
    BlockSiteUseCase, CheckAccessUseCase, ExpireSiteUseCase, GetSiteStatusUseCase,
    GetUsageSummaryUseCase, ListSitesUseCase, ReportUsageUseCase, SetDailyLimitUseCase,
    TemporaryUnblockUseCase, TrackSiteUseCase, UntrackSiteUseCase,
};
use sitegate_domain::{Config, LegacySites};
use std::sync::Arc;

pub struct UseCases {
    pub check_access: Arc<CheckAccessUseCase>,
    pub report_usage: Arc<ReportUsageUseCase>,
    pub expire_site: Arc<ExpireSiteUseCase>,
    pub track_site: Arc<TrackSiteUseCase>,
    pub untrack_site: Arc<UntrackSiteUseCase>,
    pub block_site: Arc<BlockSiteUseCase>,
    pub temporary_unblock: Arc<TemporaryUnblockUseCase>,
    pub get_site_status: Arc<GetSiteStatusUseCase>,
    pub list_sites: Arc<ListSitesUseCase>,
    pub get_usage_summary: Arc<GetUsageSummaryUseCase>,
    pub set_daily_limit: Arc<SetDailyLimitUseCase>,
}

impl UseCases {
    pub fn new(
        repos: &Repositories,
        config: &Config,
        legacy: LegacySites,
        clock: Arc<dyn Clock>,
        scheduler: Arc<dyn ExpiryScheduler>,
    ) -> Self {
        let registry = Arc::new(SiteRegistry::new(repos.site_state.clone(), clock.clone()));
        let ledger = Arc::new(UsageLedger::new(
            repos.usage_state.clone(),
            clock.clone(),
            config.usage.daily_limit_ms,
        ));

        Self {
            check_access: Arc::new(CheckAccessUseCase::new(
                registry.clone(),
                ledger.clone(),
                Arc::new(legacy),
                clock.clone(),
            )),
            report_usage: Arc::new(ReportUsageUseCase::new(registry.clone(), ledger.clone())),
            expire_site: Arc::new(ExpireSiteUseCase::new(registry.clone(), clock.clone())),
            track_site: Arc::new(TrackSiteUseCase::new(registry.clone())),
            untrack_site: Arc::new(UntrackSiteUseCase::new(registry.clone())),
            block_site: Arc::new(BlockSiteUseCase::new(
                registry.clone(),
                scheduler.clone(),
                clock.clone(),
            )),
            temporary_unblock: Arc::new(TemporaryUnblockUseCase::new(
                registry.clone(),
                scheduler,
                clock,
            )),
            get_site_status: Arc::new(GetSiteStatusUseCase::new(registry.clone(), ledger.clone())),
            list_sites: Arc::new(ListSitesUseCase::new(registry)),
            get_usage_summary: Arc::new(GetUsageSummaryUseCase::new(ledger.clone())),
            set_daily_limit: Arc::new(SetDailyLimitUseCase::new(ledger)),
        }
    }

    pub fn app_state(&self, api_key: Option<&str>) -> AppState {
        AppState {
            access: AccessUseCases {
                check_access: self.check_access.clone(),
                report_usage: self.report_usage.clone(),
            },
            sites: SiteUseCases {
                track: self.track_site.clone(),
                untrack: self.untrack_site.clone(),
                block: self.block_site.clone(),
                temporary_unblock: self.temporary_unblock.clone(),
                get_status: self.get_site_status.clone(),
                list: self.list_sites.clone(),
            },
            usage: UsageUseCases {
                get_summary: self.get_usage_summary.clone(),
                set_daily_limit: self.set_daily_limit.clone(),
            },
            api_key: api_key.map(Arc::from),
        }
    }
}
