use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::core::errors::AppError;
use crate::domain::entities::onboarding::{Company, Contact};
use crate::domain::models::{NotificationSort, PageRequest, ReviewSort, ReviewStatus};
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /vendors/reviews` 쿼리 파라미터
///
/// 빈 문자열은 값이 없는 것으로 취급합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sort: Option<String>,
}

impl ReviewListQuery {
    pub fn page(&self) -> Result<PageRequest, AppError> {
        PageRequest::parse(self.limit.as_deref(), self.offset.as_deref())
    }

    /// 상태 필터. 지정하지 않으면 `Undefined`(전체)입니다.
    pub fn status(&self) -> Result<ReviewStatus, AppError> {
        ReviewStatus::parse(self.status.as_deref().unwrap_or_default())
    }

    pub fn sort(&self) -> ReviewSort {
        ReviewSort::parse(self.sort.as_deref())
    }
}

/// `GET /vendors/{vendorId}/messages` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sort: Option<String>,
}

impl MessageListQuery {
    pub fn page(&self) -> Result<PageRequest, AppError> {
        PageRequest::parse(self.limit.as_deref(), self.offset.as_deref())
    }

    pub fn sort(&self) -> NotificationSort {
        NotificationSort::parse(self.sort.as_deref())
    }
}

/// 리뷰 상태 변경 요청
///
/// `message`가 비어 있지 않으면 상태 변경 후 벤더에게 알림이 전송됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChangeStatusRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    #[validate(custom(function = "validate_status_token"))]
    pub status: String,
}

/// 벤더에게 메시지 전송 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NotificationRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
}

/// 벤더의 온보딩 문서 제출 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitDocumentsRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_company"))]
    pub company: Company,

    #[serde(default)]
    #[validate(custom(function = "validate_contact"))]
    pub contact: Contact,
}

fn validate_status_token(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(ValidationError::new("status_required").with_message("status is required".into()));
    }
    Ok(())
}

fn validate_company(company: &Company) -> Result<(), ValidationError> {
    let has_name = company
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());

    if !has_name {
        return Err(ValidationError::new("company_name_required")
            .with_message("company name is required".into()));
    }
    Ok(())
}

fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    let people = [contact.authorized.as_ref(), contact.technical.as_ref()];

    if people
        .into_iter()
        .flatten()
        .any(|person| person.full_name.trim().is_empty())
    {
        return Err(ValidationError::new("contact_name_required")
            .with_message("contact full name is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::onboarding::ContactPerson;

    #[test]
    fn test_change_status_requires_status() {
        let request: ChangeStatusRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: ChangeStatusRequest =
            serde_json::from_str(r#"{"status":"approved"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_change_status_rejects_blank_status() {
        let request: ChangeStatusRequest = serde_json::from_str(r#"{"status":"   "}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_notification_requires_title() {
        let request: NotificationRequest = serde_json::from_str(r#"{"message":"M"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: NotificationRequest = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_submit_documents_validation() {
        let request = SubmitDocumentsRequest::default();
        assert!(request.validate().is_err());

        let request = SubmitDocumentsRequest {
            company: Company {
                name: Some("Pixel Forge".to_string()),
                ..Company::default()
            },
            contact: Contact {
                authorized: Some(ContactPerson {
                    full_name: "  ".to_string(),
                    ..ContactPerson::default()
                }),
                technical: None,
            },
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_review_query_status_defaults_to_undefined() {
        let query = ReviewListQuery::default();
        assert_eq!(query.status().unwrap(), ReviewStatus::Undefined);
        assert_eq!(query.page().unwrap(), PageRequest::default());

        let query = ReviewListQuery {
            status: Some("archived".to_string()),
            ..ReviewListQuery::default()
        };
        assert!(matches!(query.status(), Err(AppError::BadRequest(_))));
    }
}
