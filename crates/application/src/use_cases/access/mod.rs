mod check_access;
mod report_usage;

pub use check_access::CheckAccessUseCase;
pub use report_usage::ReportUsageUseCase;
