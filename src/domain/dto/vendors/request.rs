use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::models::PageRequest;
use crate::utils::string_utils::deserialize_optional_string;

/// 벤더 생성 요청
///
/// `managerId`의 사용자가 벤더의 첫 번째 구성원이 됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    /// 3차 도메인 (`{domain3}.example.com`)
    #[serde(default)]
    #[validate(length(min = 2, max = 63, message = "domain3 must be 2-63 characters"))]
    #[validate(custom(function = "validate_domain3"))]
    pub domain3: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    pub how_many_products: String,

    #[serde(default)]
    #[validate(required(message = "managerId is required"))]
    pub manager_id: Option<Uuid>,
}

/// 벤더 수정 요청. 관리자와 구성원 목록은 바뀌지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 2, max = 63, message = "domain3 must be 2-63 characters"))]
    #[validate(custom(function = "validate_domain3"))]
    pub domain3: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    pub how_many_products: String,
}

/// `GET /vendors` 쿼리. 잘못된 값은 기본값으로 대체됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
}

impl VendorListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::parse_lenient(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// 소문자 영문, 숫자, 하이픈만 허용 (앞뒤 하이픈 불가)
fn validate_domain3(domain3: &str) -> Result<(), ValidationError> {
    let valid_chars = domain3
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid_chars || domain3.starts_with('-') || domain3.ends_with('-') {
        return Err(ValidationError::new("invalid_domain3")
            .with_message("domain3 may contain lowercase letters, digits and inner hyphens".into()));
    }
    Ok(())
}
