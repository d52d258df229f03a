pub mod access;
pub mod site;
pub mod usage;

pub use access::{CheckAccessRequest, ReportUsageRequest};
pub use site::{
    BlockSiteRequest, SiteResponse, SiteStatusResponse, TemporaryUnblockRequest,
    TrackSiteRequest,
};
pub use usage::{SetDailyLimitRequest, UsageSummaryResponse};
