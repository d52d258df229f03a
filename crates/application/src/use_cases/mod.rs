pub mod access;
pub mod expiry;
pub mod sites;
pub mod usage;

pub use access::{CheckAccessUseCase, ReportUsageUseCase};
pub use expiry::ExpireSiteUseCase;
pub use sites::{
    BlockSiteUseCase, GetSiteStatusUseCase, ListSitesUseCase, SiteStatus, TemporaryUnblockUseCase,
    TrackSiteUseCase, UntrackSiteUseCase,
};
pub use usage::{GetUsageSummaryUseCase, SetDailyLimitUseCase};
