//! 목록 정렬 키
//!
//! 정렬 파라미터는 `+필드`(오름차순), `-필드`(내림차순), `필드`(오름차순) 형식입니다.
//! 알 수 없는 키는 에러 없이 기본 정렬로 대체됩니다.

use mongodb::bson::{doc, Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn mongo_order(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }

    /// 오름차순 비교 결과에 방향을 적용합니다.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// `+name` → (Asc, "name")
fn split_sort_param(raw: &str) -> (SortDirection, &str) {
    let raw = raw.trim();
    if let Some(field) = raw.strip_prefix('-') {
        (SortDirection::Desc, field)
    } else if let Some(field) = raw.strip_prefix('+') {
        (SortDirection::Asc, field)
    } else {
        (SortDirection::Asc, raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortField {
    Name,
    Status,
    UpdatedAt,
}

/// 리뷰 요청 목록 정렬 (기본값: 최근 수정 순)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub direction: SortDirection,
}

impl Default for ReviewSort {
    fn default() -> Self {
        Self {
            field: ReviewSortField::UpdatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl ReviewSort {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let (direction, field) = split_sort_param(raw);
        let field = match field {
            "name" => ReviewSortField::Name,
            "status" => ReviewSortField::Status,
            "updatedAt" | "updated_at" => ReviewSortField::UpdatedAt,
            _ => return Self::default(),
        };

        Self { field, direction }
    }

    pub fn mongo_sort(&self) -> Document {
        let order = self.direction.mongo_order();
        match self.field {
            ReviewSortField::Name => doc! { "company.name": order, "vendor_id": 1 },
            ReviewSortField::Status => doc! { "review_status": order, "vendor_id": 1 },
            ReviewSortField::UpdatedAt => doc! { "updated_at": order, "vendor_id": 1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSortField {
    CreatedAt,
    Title,
}

/// 알림 목록 정렬 (기본값: 최신 순)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSort {
    pub field: NotificationSortField,
    pub direction: SortDirection,
}

impl Default for NotificationSort {
    fn default() -> Self {
        Self {
            field: NotificationSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl NotificationSort {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let (direction, field) = split_sort_param(raw);
        let field = match field {
            "createdAt" | "created_at" => NotificationSortField::CreatedAt,
            "title" => NotificationSortField::Title,
            _ => return Self::default(),
        };

        Self { field, direction }
    }

    pub fn mongo_sort(&self) -> Document {
        let order = self.direction.mongo_order();
        match self.field {
            NotificationSortField::CreatedAt => doc! { "created_at": order, "_id": 1 },
            NotificationSortField::Title => doc! { "title": order, "_id": 1 },
        }
    }
}
