//! 벤더 알림 엔티티

pub mod notification;

pub use notification::{NewNotification, Notification};
