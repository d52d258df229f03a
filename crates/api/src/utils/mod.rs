pub mod caller_origin;

pub use caller_origin::CallerOrigin;
