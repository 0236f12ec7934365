//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 아래의 저장소 trait에만 의존하고, 구현체는 기동 시 선택됩니다.
//!
//! | trait | MongoDB 구현 | 메모리 구현 |
//! |-------|--------------|-------------|
//! | [`DocumentsStore`] | [`documents::DocumentsRepository`] (+ Redis 캐시) | [`memory::MemoryDocumentsStore`] |
//! | [`NotificationStore`] | [`notifications::NotificationRepository`] | [`memory::MemoryNotificationStore`] |
//! | [`VendorStore`] | [`vendors::VendorRepository`] | [`memory::MemoryVendorStore`] |
//!
//! 목록 조회는 항상 `Page { items, total }`을 돌려주며, `total`은 페이지 적용 전
//! 필터에 맞는 전체 개수입니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use mongodb::Cursor;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::notifications::Notification;
use crate::domain::entities::onboarding::{Company, Contact, DocumentsInfo};
use crate::domain::entities::vendors::Vendor;
use crate::domain::models::{NotificationSort, Page, PageRequest, ReviewSort, ReviewStatus};

pub mod documents;
pub mod memory;
pub mod notifications;
pub mod vendors;

/// 리뷰 요청 목록 필터
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    /// 회사 이름 부분 일치 (대소문자 무시)
    pub name: Option<String>,
    /// `Undefined`이면 상태로 거르지 않습니다.
    pub status: ReviewStatus,
}

impl ReviewFilter {
    pub fn new(name: Option<String>, status: ReviewStatus) -> Self {
        Self { name, status }
    }
}

/// 벤더별 온보딩 문서 저장소
#[async_trait]
pub trait DocumentsStore: Send + Sync {
    async fn find_by_vendor(&self, vendor_id: Uuid) -> AppResult<Option<DocumentsInfo>>;

    async fn find_page(
        &self,
        filter: &ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> AppResult<Page<DocumentsInfo>>;

    /// 회사/연락처 정보를 기록하고 저장된 문서를 돌려줍니다.
    ///
    /// 문서가 없으면 상태 `New`로 생성하고, 있으면 회사/연락처와 수정 시각만
    /// 바꿉니다. 리뷰 상태와 생성 시각은 건드리지 않습니다.
    async fn submit(
        &self,
        vendor_id: Uuid,
        company: &Company,
        contact: &Contact,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<DocumentsInfo>;

    /// 리뷰 상태와 수정 시각만 갱신합니다. 문서가 없으면 `false`.
    async fn update_status(
        &self,
        vendor_id: Uuid,
        status: ReviewStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<bool>;
}

/// 벤더 알림 저장소 (추가 전용)
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert(&self, notification: &Notification) -> AppResult<()>;

    /// `query`는 제목 또는 본문에 대한 대소문자 무시 부분 일치입니다.
    async fn find_page(
        &self,
        vendor_id: Uuid,
        query: Option<&str>,
        sort: NotificationSort,
        page: PageRequest,
    ) -> AppResult<Page<Notification>>;
}

#[async_trait]
pub trait VendorStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vendor>>;

    async fn find_by_domain3(&self, domain3: &str) -> AppResult<Option<Vendor>>;

    /// 생성 순으로 정렬된 벤더 목록
    async fn find_page(&self, page: PageRequest) -> AppResult<Page<Vendor>>;

    /// `domain3`가 이미 사용 중이면 `ConflictError`
    async fn insert(&self, vendor: &Vendor) -> AppResult<()>;

    /// 벤더가 없으면 `false`
    async fn update(&self, vendor: &Vendor) -> AppResult<bool>;
}

pub(crate) fn to_bson_datetime(at: &DateTime<Utc>) -> mongodb::bson::DateTime {
    mongodb::bson::DateTime::from_millis(at.timestamp_millis())
}

pub(crate) fn from_bson_datetime(at: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or_default()
}

pub(crate) fn parse_stored_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::DatabaseError(format!("저장된 UUID 형식 오류 `{}`: {}", value, e)))
}

/// 커서의 모든 레코드를 읽어 변환합니다.
pub(crate) async fn collect_records<R, T, F>(mut cursor: Cursor<R>, convert: F) -> AppResult<Vec<T>>
where
    R: DeserializeOwned + Send + Sync + Unpin,
    F: Fn(R) -> AppResult<T>,
{
    let mut items = Vec::new();

    while let Some(record) = cursor.next().await {
        let record = record.map_err(|e| AppError::DatabaseError(e.to_string()))?;
        items.push(convert(record)?);
    }

    Ok(items)
}
