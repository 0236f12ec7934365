use serde::{Deserialize, Serialize};

use crate::domain::dto::format_timestamp;
use crate::domain::entities::notifications::Notification;
use crate::domain::entities::onboarding::{Company, Contact, DocumentsInfo};

/// 리뷰 목록의 한 줄 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortDocumentsInfoDto {
    pub vendor_id: String,
    pub name: String,
    pub country: String,
    pub person: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub status: String,
}

impl From<DocumentsInfo> for ShortDocumentsInfoDto {
    fn from(doc: DocumentsInfo) -> Self {
        Self {
            vendor_id: doc.vendor_id.to_string(),
            name: doc.company_name().unwrap_or_default().to_string(),
            country: doc.company.country.clone().unwrap_or_default(),
            person: doc.authorized_person().unwrap_or_default().to_string(),
            updated_at: format_timestamp(&doc.updated_at),
            status: doc.review_status.to_string(),
        }
    }
}

/// 벤더 문서 전체 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsInfoDto {
    pub vendor_id: String,
    pub company: Company,
    pub contact: Contact,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DocumentsInfo> for DocumentsInfoDto {
    fn from(doc: DocumentsInfo) -> Self {
        Self {
            vendor_id: doc.vendor_id.to_string(),
            status: doc.review_status.to_string(),
            created_at: format_timestamp(&doc.created_at),
            updated_at: format_timestamp(&doc.updated_at),
            company: doc.company,
            contact: doc.contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub message: String,
    pub title: String,
    pub created_at: String,
    pub is_read: bool,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message,
            title: notification.title,
            created_at: format_timestamp(&notification.created_at),
            is_read: notification.is_read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::onboarding::ContactPerson;
    use crate::domain::models::ReviewStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn documents() -> DocumentsInfo {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        DocumentsInfo {
            vendor_id: Uuid::nil(),
            company: Company {
                name: Some("Pixel Forge".to_string()),
                country: Some("KR".to_string()),
                ..Company::default()
            },
            contact: Contact {
                authorized: Some(ContactPerson {
                    full_name: "Kim Minji".to_string(),
                    ..ContactPerson::default()
                }),
                technical: None,
            },
            review_status: ReviewStatus::Reviewing,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_short_dto_mapping() {
        let dto = ShortDocumentsInfoDto::from(documents());

        assert_eq!(dto.vendor_id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(dto.name, "Pixel Forge");
        assert_eq!(dto.country, "KR");
        assert_eq!(dto.person, "Kim Minji");
        assert_eq!(dto.updated_at, "2024-05-01T10:00:00Z");
        assert_eq!(dto.status, "reviewing");
    }

    #[test]
    fn test_short_dto_missing_fields_are_empty() {
        let mut doc = documents();
        doc.company = Company::default();
        doc.contact = Contact::default();

        let dto = ShortDocumentsInfoDto::from(doc);
        assert_eq!(dto.name, "");
        assert_eq!(dto.person, "");
    }

    #[test]
    fn test_short_dto_json_field_names() {
        let json = serde_json::to_value(ShortDocumentsInfoDto::from(documents())).unwrap();

        assert!(json.get("vendor_id").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_notification_dto_json() {
        let notification = Notification {
            id: Uuid::nil(),
            vendor_id: Uuid::nil(),
            title: "T".to_string(),
            message: "M".to_string(),
            is_read: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(NotificationDto::from(notification)).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T10:00:00Z");
        assert_eq!(json["isRead"], false);
        assert_eq!(json["title"], "T");
    }
}
