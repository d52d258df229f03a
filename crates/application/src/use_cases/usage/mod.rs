mod get_usage_summary;
mod set_daily_limit;

pub use get_usage_summary::GetUsageSummaryUseCase;
pub use set_daily_limit::SetDailyLimitUseCase;
