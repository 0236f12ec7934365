//! # 벤더 알림 서비스
//!
//! 알림은 벤더 단위로 저장되며 추가 전용입니다. 관리자가 직접 보내거나
//! 리뷰 상태 변경 시 [`NotificationDispatcher`](super::NotificationDispatcher)를 통해 생성됩니다.

use std::sync::Arc;

use log::info;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::notifications::{NewNotification, Notification};
use crate::domain::models::{NotificationSort, Page, PageRequest};
use crate::repositories::NotificationStore;

pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// 새 알림을 저장하고 저장된 레코드를 돌려줍니다.
    ///
    /// ID(v4)와 생성 시각은 여기서 부여되며 `is_read`는 `false`로 시작합니다.
    pub async fn send_notification(&self, notification: NewNotification) -> AppResult<Notification> {
        if notification.title.trim().is_empty() {
            return Err(AppError::UnprocessableEntity("title is required".to_string()));
        }

        let notification = notification.into_notification();
        self.store.insert(&notification).await?;

        info!(
            "📨 알림 저장: vendor={} id={}",
            notification.vendor_id, notification.id
        );

        Ok(notification)
    }

    /// 벤더의 알림 목록. `query`는 제목 또는 본문에 대한 대소문자 무시 부분 일치입니다.
    pub async fn get_notifications(
        &self,
        vendor_id: Uuid,
        page: PageRequest,
        query: Option<&str>,
        sort: NotificationSort,
    ) -> AppResult<Page<Notification>> {
        self.store.find_page(vendor_id, query, sort, page).await
    }
}
