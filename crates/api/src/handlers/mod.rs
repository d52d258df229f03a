pub mod access;
pub mod health;
pub mod sites;
pub mod usage;

pub use health::health_check;
