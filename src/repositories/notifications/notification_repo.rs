//! # 벤더 알림 리포지토리
//!
//! `vendor_notifications` 컬렉션. 알림은 추가만 되고 수정/삭제되지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime as BsonDateTime, Document, doc},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::notifications::Notification;
use crate::domain::models::{NotificationSort, Page, PageRequest};
use crate::repositories::{
    NotificationStore, collect_records, from_bson_datetime, parse_stored_uuid, to_bson_datetime,
};
use crate::utils::string_utils::escape_regex;

const COLLECTION: &str = "vendor_notifications";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NotificationRecord {
    #[serde(rename = "_id")]
    id: String,
    vendor_id: String,
    title: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    is_read: bool,
    created_at: BsonDateTime,
}

impl From<&Notification> for NotificationRecord {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            vendor_id: notification.vendor_id.to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            created_at: to_bson_datetime(&notification.created_at),
        }
    }
}

impl NotificationRecord {
    fn into_domain(self) -> AppResult<Notification> {
        Ok(Notification {
            id: parse_stored_uuid(&self.id)?,
            vendor_id: parse_stored_uuid(&self.vendor_id)?,
            title: self.title,
            message: self.message,
            is_read: self.is_read,
            created_at: from_bson_datetime(self.created_at),
        })
    }
}

fn notification_filter_document(vendor_id: Uuid, query: Option<&str>) -> Document {
    let mut filter = doc! { "vendor_id": vendor_id.to_string() };

    if let Some(query) = query {
        let pattern = escape_regex(query);
        filter.insert(
            "$or",
            vec![
                doc! { "title": { "$regex": pattern.clone(), "$options": "i" } },
                doc! { "message": { "$regex": pattern, "$options": "i" } },
            ],
        );
    }

    filter
}

pub struct NotificationRepository {
    db: Arc<Database>,
}

impl NotificationRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<NotificationRecord> {
        self.db.get_database().collection(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let vendor_index = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("vendor_id_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(vendor_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn insert(&self, notification: &Notification) -> AppResult<()> {
        self.collection()
            .insert_one(NotificationRecord::from(notification))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_page(
        &self,
        vendor_id: Uuid,
        query: Option<&str>,
        sort: NotificationSort,
        page: PageRequest,
    ) -> AppResult<Page<Notification>> {
        let filter = notification_filter_document(vendor_id, query);

        let total = self
            .collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if page.limit == 0 {
            return Ok(Page::new(Vec::new(), total));
        }

        let cursor = self
            .collection()
            .find(filter)
            .sort(sort.mongo_sort())
            .skip(page.offset)
            .limit(page.mongo_limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let items = collect_records(cursor, NotificationRecord::into_domain).await?;
        Ok(Page::new(items, total))
    }
}
