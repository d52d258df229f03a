use sitegate_application::use_cases::{
    BlockSiteUseCase, CheckAccessUseCase, GetSiteStatusUseCase, GetUsageSummaryUseCase,
    ListSitesUseCase, ReportUsageUseCase, SetDailyLimitUseCase, TemporaryUnblockUseCase,
    TrackSiteUseCase, UntrackSiteUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AccessUseCases {
    pub check_access: Arc<CheckAccessUseCase>,
    pub report_usage: Arc<ReportUsageUseCase>,
}

#[derive(Clone)]
pub struct SiteUseCases {
    pub track: Arc<TrackSiteUseCase>,
    pub untrack: Arc<UntrackSiteUseCase>,
    pub block: Arc<BlockSiteUseCase>,
    pub temporary_unblock: Arc<TemporaryUnblockUseCase>,
    pub get_status: Arc<GetSiteStatusUseCase>,
    pub list: Arc<ListSitesUseCase>,
}

#[derive(Clone)]
pub struct UsageUseCases {
    pub get_summary: Arc<GetUsageSummaryUseCase>,
    pub set_daily_limit: Arc<SetDailyLimitUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub access: AccessUseCases,
    pub sites: SiteUseCases,
    pub usage: UsageUseCases,
    pub api_key: Option<Arc<str>>,
}
