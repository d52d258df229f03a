mod site_registry;
mod usage_ledger;

pub use site_registry::SiteRegistry;
pub use usage_ledger::UsageLedger;
