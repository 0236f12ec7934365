//! 인메모리 저장소
//!
//! `STORAGE_BACKEND=memory`로 기동하거나 테스트에서 사용합니다.
//! 필터, 정렬, 페이지 규칙은 MongoDB 구현과 같습니다.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::notifications::Notification;
use crate::domain::entities::onboarding::{Company, Contact, DocumentsInfo};
use crate::domain::entities::vendors::Vendor;
use crate::domain::models::sorting::{NotificationSortField, ReviewSortField};
use crate::domain::models::{NotificationSort, Page, PageRequest, ReviewSort, ReviewStatus};
use crate::repositories::{DocumentsStore, NotificationStore, ReviewFilter, VendorStore};
use crate::utils::string_utils::contains_ignore_case;

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("memory store lock poisoned".to_string())
}

#[derive(Default)]
pub struct MemoryDocumentsStore {
    records: RwLock<HashMap<Uuid, DocumentsInfo>>,
}

impl MemoryDocumentsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_review_filter(doc: &DocumentsInfo, filter: &ReviewFilter) -> bool {
    let status_ok = filter.status.is_undefined() || doc.review_status == filter.status;
    let name_ok = match filter.name.as_deref() {
        Some(name) => doc
            .company_name()
            .is_some_and(|company| contains_ignore_case(company, name)),
        None => true,
    };
    status_ok && name_ok
}

fn compare_documents(a: &DocumentsInfo, b: &DocumentsInfo, sort: ReviewSort) -> Ordering {
    let ordering = match sort.field {
        ReviewSortField::Name => a.company_name().cmp(&b.company_name()),
        ReviewSortField::Status => a.review_status.as_str().cmp(b.review_status.as_str()),
        ReviewSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };

    sort.direction
        .apply(ordering)
        .then_with(|| a.vendor_id.to_string().cmp(&b.vendor_id.to_string()))
}

#[async_trait]
impl DocumentsStore for MemoryDocumentsStore {
    async fn find_by_vendor(&self, vendor_id: Uuid) -> AppResult<Option<DocumentsInfo>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&vendor_id).cloned())
    }

    async fn find_page(
        &self,
        filter: &ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> AppResult<Page<DocumentsInfo>> {
        let records = self.records.read().map_err(poisoned)?;

        let mut matched: Vec<DocumentsInfo> = records
            .values()
            .filter(|doc| matches_review_filter(doc, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| compare_documents(a, b, sort));

        let total = matched.len() as u64;
        Ok(Page::new(page.apply(matched), total))
    }

    async fn submit(
        &self,
        vendor_id: Uuid,
        company: &Company,
        contact: &Contact,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<DocumentsInfo> {
        let mut records = self.records.write().map_err(poisoned)?;

        let documents = records.entry(vendor_id).or_insert_with(|| DocumentsInfo {
            created_at: submitted_at,
            ..DocumentsInfo::submitted(vendor_id, company.clone(), contact.clone())
        });
        documents.company = company.clone();
        documents.contact = contact.clone();
        documents.updated_at = submitted_at;

        Ok(documents.clone())
    }

    async fn update_status(
        &self,
        vendor_id: Uuid,
        status: ReviewStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;

        match records.get_mut(&vendor_id) {
            Some(doc) => {
                doc.review_status = status;
                doc.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct MemoryNotificationStore {
    records: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_notifications(a: &Notification, b: &Notification, sort: NotificationSort) -> Ordering {
    let ordering = match sort.field {
        NotificationSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        NotificationSortField::Title => a.title.cmp(&b.title),
    };

    sort.direction
        .apply(ordering)
        .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: &Notification) -> AppResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.push(notification.clone());
        Ok(())
    }

    async fn find_page(
        &self,
        vendor_id: Uuid,
        query: Option<&str>,
        sort: NotificationSort,
        page: PageRequest,
    ) -> AppResult<Page<Notification>> {
        let records = self.records.read().map_err(poisoned)?;

        let mut matched: Vec<Notification> = records
            .iter()
            .filter(|n| n.vendor_id == vendor_id)
            .filter(|n| match query {
                Some(q) => contains_ignore_case(&n.title, q) || contains_ignore_case(&n.message, q),
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| compare_notifications(a, b, sort));

        let total = matched.len() as u64;
        Ok(Page::new(page.apply(matched), total))
    }
}

#[derive(Default)]
pub struct MemoryVendorStore {
    records: RwLock<Vec<Vendor>>,
}

impl MemoryVendorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VendorStore for MemoryVendorStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vendor>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_domain3(&self, domain3: &str) -> AppResult<Option<Vendor>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|v| v.domain3 == domain3).cloned())
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<Page<Vendor>> {
        let records = self.records.read().map_err(poisoned)?;

        let mut vendors = records.clone();
        vendors.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let total = vendors.len() as u64;
        Ok(Page::new(page.apply(vendors), total))
    }

    async fn insert(&self, vendor: &Vendor) -> AppResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;

        if records.iter().any(|v| v.domain3 == vendor.domain3) {
            return Err(AppError::ConflictError(format!(
                "Domain `{}` is already taken",
                vendor.domain3
            )));
        }

        records.push(vendor.clone());
        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> AppResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;

        if records
            .iter()
            .any(|v| v.domain3 == vendor.domain3 && v.id != vendor.id)
        {
            return Err(AppError::ConflictError(format!(
                "Domain `{}` is already taken",
                vendor.domain3
            )));
        }

        match records.iter_mut().find(|v| v.id == vendor.id) {
            Some(existing) => {
                *existing = vendor.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn documents(name: &str, status: ReviewStatus, minutes_ago: i64) -> DocumentsInfo {
        let mut doc = DocumentsInfo::submitted(
            Uuid::new_v4(),
            Company {
                name: Some(name.to_string()),
                ..Company::default()
            },
            Contact::default(),
        );
        doc.review_status = status;
        doc.updated_at = Utc::now() - Duration::minutes(minutes_ago);
        doc
    }

    fn seeded_documents() -> MemoryDocumentsStore {
        let store = MemoryDocumentsStore::new();
        {
            let mut records = store.records.write().unwrap();
            for doc in [
                documents("Pixel Forge", ReviewStatus::New, 30),
                documents("Orbit Games", ReviewStatus::Approved, 10),
                documents("pixel union", ReviewStatus::Reviewing, 20),
            ] {
                records.insert(doc.vendor_id, doc);
            }
        }
        store
    }

    #[tokio::test]
    async fn test_submit_creates_new_then_keeps_status() {
        let store = MemoryDocumentsStore::new();
        let vendor_id = Uuid::new_v4();
        let company = Company {
            name: Some("Pixel Forge".to_string()),
            ..Company::default()
        };

        let created = store
            .submit(vendor_id, &company, &Contact::default(), Utc::now())
            .await
            .unwrap();
        assert_eq!(created.review_status, ReviewStatus::New);

        store
            .update_status(vendor_id, ReviewStatus::Approved, Utc::now())
            .await
            .unwrap();

        let renamed = Company {
            name: Some("Pixel Forge Studios".to_string()),
            ..Company::default()
        };
        let resubmitted = store
            .submit(vendor_id, &renamed, &Contact::default(), Utc::now())
            .await
            .unwrap();

        assert_eq!(resubmitted.review_status, ReviewStatus::Approved);
        assert_eq!(resubmitted.created_at, created.created_at);
        assert_eq!(resubmitted.company_name(), Some("Pixel Forge Studios"));
    }

    #[tokio::test]
    async fn test_documents_default_sort_is_latest_first() {
        let store = seeded_documents();

        let page = store
            .find_page(&ReviewFilter::default(), ReviewSort::default(), PageRequest::default())
            .await
            .unwrap();

        let names: Vec<_> = page.items.iter().filter_map(|d| d.company_name()).collect();
        assert_eq!(names, vec!["Orbit Games", "pixel union", "Pixel Forge"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_documents_name_filter_ignores_case() {
        let store = seeded_documents();
        let filter = ReviewFilter::new(Some("PIXEL".to_string()), ReviewStatus::Undefined);

        let page = store
            .find_page(&filter, ReviewSort::parse(Some("name")), PageRequest::default())
            .await
            .unwrap();

        let names: Vec<_> = page.items.iter().filter_map(|d| d.company_name()).collect();
        assert_eq!(names, vec!["Pixel Forge", "pixel union"]);
    }

    #[tokio::test]
    async fn test_documents_status_filter_and_zero_limit() {
        let store = seeded_documents();
        let filter = ReviewFilter::new(None, ReviewStatus::Approved);

        let page = store
            .find_page(&filter, ReviewSort::default(), PageRequest::new(0, 0))
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_update_status_of_missing_documents() {
        let store = MemoryDocumentsStore::new();

        let updated = store
            .update_status(Uuid::new_v4(), ReviewStatus::Approved, Utc::now())
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_notifications_are_scoped_to_vendor() {
        let store = MemoryNotificationStore::new();
        let vendor = Uuid::new_v4();
        let other = Uuid::new_v4();

        for (owner, title) in [(vendor, "Welcome"), (vendor, "Docs approved"), (other, "Welcome")] {
            let notification = crate::domain::entities::notifications::NewNotification::new(
                owner, title, "body",
            )
            .into_notification();
            store.insert(&notification).await.unwrap();
        }

        let page = store
            .find_page(vendor, Some("approved"), NotificationSort::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Docs approved");

        let page = store
            .find_page(vendor, Some("nothing"), NotificationSort::default(), PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_vendor_domain_is_unique() {
        let store = MemoryVendorStore::new();
        let manager = Uuid::new_v4();
        let first = Vendor::new(
            "A".to_string(),
            "studio".to_string(),
            "a@studio.io".to_string(),
            String::new(),
            manager,
        );
        let second = Vendor::new(
            "B".to_string(),
            "studio".to_string(),
            "b@studio.io".to_string(),
            String::new(),
            manager,
        );

        store.insert(&first).await.unwrap();
        assert!(matches!(
            store.insert(&second).await,
            Err(AppError::ConflictError(_))
        ));
        assert!(matches!(
            store.update(&second).await,
            Err(AppError::ConflictError(_))
        ));
    }
}
