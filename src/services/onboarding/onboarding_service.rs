//! # 관리자 온보딩 리뷰 서비스
//!
//! 벤더가 제출한 온보딩 문서를 관리자가 검토하는 흐름을 담당합니다.
//!
//! - 상태는 `New`, `Reviewing`, `Checking`, `Approved`, `Rejected` 중 어느 값으로든
//!   바로 변경할 수 있습니다. 전이 규칙은 강제하지 않습니다.
//! - 상태 변경에 메시지가 붙어 있으면 벤더에게 알림이 정확히 한 번 큐잉됩니다.
//!   알림 실패는 상태 변경 결과에 영향을 주지 않습니다.
//! - 같은 벤더에 대한 동시 상태 변경은 마지막 쓰기가 남습니다.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::notifications::NewNotification;
use crate::domain::entities::onboarding::{Company, Contact, DocumentsInfo};
use crate::domain::models::{Page, PageRequest, ReviewSort, ReviewStatus};
use crate::repositories::{DocumentsStore, ReviewFilter, VendorStore};
use crate::services::notifications::NotificationDispatcher;

pub struct AdminOnboardingService {
    documents: Arc<dyn DocumentsStore>,
    vendors: Arc<dyn VendorStore>,
    dispatcher: NotificationDispatcher,
}

impl AdminOnboardingService {
    pub fn new(
        documents: Arc<dyn DocumentsStore>,
        vendors: Arc<dyn VendorStore>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            documents,
            vendors,
            dispatcher,
        }
    }

    async fn ensure_vendor(&self, vendor_id: Uuid) -> AppResult<()> {
        match self.vendors.find_by_id(vendor_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Vendor not found".to_string())),
        }
    }

    /// 리뷰 상태를 변경합니다.
    ///
    /// `Undefined`는 기록할 수 없는 상태이므로 `BadRequest`입니다.
    /// 벤더나 문서가 없으면 `NotFound`이며 이때는 알림도 보내지 않습니다.
    /// `message`가 공백이 아니면 제목과 본문이 모두 `message`인 알림을 큐에 넣습니다.
    pub async fn change_status(
        &self,
        vendor_id: Uuid,
        status: ReviewStatus,
        message: Option<&str>,
    ) -> AppResult<()> {
        if status.is_undefined() {
            return Err(AppError::BadRequest(format!("Bad status: `{}`", status)));
        }
        self.ensure_vendor(vendor_id).await?;

        let updated = self
            .documents
            .update_status(vendor_id, status, Utc::now())
            .await?;
        if !updated {
            return Err(AppError::NotFound("Documents not found".to_string()));
        }

        info!("📝 리뷰 상태 변경: vendor={} status={}", vendor_id, status);

        if let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) {
            debug!("상태 변경 알림 큐잉: vendor={}", vendor_id);
            self.dispatcher
                .dispatch(NewNotification::status_message(vendor_id, message));
        }

        Ok(())
    }

    pub async fn get_for_vendor(&self, vendor_id: Uuid) -> AppResult<DocumentsInfo> {
        self.documents
            .find_by_vendor(vendor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documents not found".to_string()))
    }

    /// 리뷰 요청 목록과 필터에 맞는 전체 개수
    pub async fn get_requests(
        &self,
        page: PageRequest,
        name: Option<String>,
        status: ReviewStatus,
        sort: ReviewSort,
    ) -> AppResult<Page<DocumentsInfo>> {
        let filter = ReviewFilter::new(name, status);
        self.documents.find_page(&filter, sort, page).await
    }

    /// 벤더의 온보딩 문서를 제출하거나 갱신합니다.
    ///
    /// 처음 제출하면 상태가 `New`로 시작하고, 다시 제출하면 회사/연락처 정보만
    /// 바뀌며 기존 리뷰 상태는 유지됩니다.
    pub async fn submit_documents(
        &self,
        vendor_id: Uuid,
        company: Company,
        contact: Contact,
    ) -> AppResult<DocumentsInfo> {
        self.ensure_vendor(vendor_id).await?;

        let documents = self
            .documents
            .submit(vendor_id, &company, &contact, Utc::now())
            .await?;
        info!("📄 온보딩 문서 저장: vendor={}", vendor_id);

        Ok(documents)
    }
}
