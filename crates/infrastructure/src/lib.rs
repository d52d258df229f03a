//! SiteGate Infrastructure Layer
pub mod clock;
pub mod database;
pub mod repositories;
