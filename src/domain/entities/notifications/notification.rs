use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 벤더에게 전달된 메시지
///
/// 생성 이후에는 읽음 여부를 제외하고 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// 아직 저장되지 않은 알림 (ID와 생성 시각은 저장 시 부여)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub vendor_id: Uuid,
    pub title: String,
    pub message: String,
}

impl NewNotification {
    pub fn new(vendor_id: Uuid, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            vendor_id,
            title: title.into(),
            message: message.into(),
        }
    }

    /// 상태 변경에 첨부된 메시지로 만든 알림. 제목과 본문이 같습니다.
    pub fn status_message(vendor_id: Uuid, message: &str) -> Self {
        Self::new(vendor_id, message, message)
    }

    pub fn into_notification(self) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            vendor_id: self.vendor_id,
            title: self.title,
            message: self.message,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
