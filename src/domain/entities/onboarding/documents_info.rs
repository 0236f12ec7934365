//! Onboarding Documents Entity
//!
//! 벤더가 제출한 온보딩 문서 묶음입니다. 벤더당 하나만 존재하며
//! 리뷰 상태는 [`AdminOnboardingService`](crate::services::onboarding::onboarding_service::AdminOnboardingService)
//! 의 명시적인 상태 변경 호출로만 바뀝니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::ReviewStatus;

/// 회사 정보
///
/// 문서화된 키만 허용되는 타입 레코드입니다. 모든 필드는 선택 사항입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_address: Option<String>,
}

/// 담당자 한 명의 연락처
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// 권한 위임 담당자와 기술 담당자
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized: Option<ContactPerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<ContactPerson>,
}

/// 캐시에 JSON으로 저장되므로 Serialize/Deserialize를 구현합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentsInfo {
    pub vendor_id: Uuid,
    pub company: Company,
    pub contact: Contact,
    pub review_status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentsInfo {
    /// 최초 제출된 문서 묶음. 상태는 `New`로 시작합니다.
    pub fn submitted(vendor_id: Uuid, company: Company, contact: Contact) -> Self {
        let now = Utc::now();

        Self {
            vendor_id,
            company,
            contact,
            review_status: ReviewStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.name.as_deref()
    }

    /// 권한 위임 담당자 이름
    pub fn authorized_person(&self) -> Option<&str> {
        self.contact
            .authorized
            .as_ref()
            .map(|person| person.full_name.as_str())
    }
}
