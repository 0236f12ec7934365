//! 벤더 엔티티

pub mod vendor;

pub use vendor::Vendor;
