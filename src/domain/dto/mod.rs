//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조를 정의합니다.
//! 도메인 엔티티는 직접 직렬화하지 않고 항상 이 모듈의 DTO로 변환한 뒤 응답합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── onboarding/         # 관리자 온보딩 리뷰 / 벤더 메시지
//! │   ├── request.rs
//! │   └── response.rs
//! └── vendors/            # 벤더 계정
//!     ├── request.rs
//!     └── response.rs
//! ```
//!
//! ## 규칙
//!
//! - 요청 DTO의 필수 필드는 `#[serde(default)]` + `validator`로 검증합니다.
//!   필드가 빠진 요청은 역직렬화 단계(400)가 아니라 검증 단계(422)에서 거부됩니다.
//! - 시각은 [`format_timestamp`]로 초 단위 RFC 3339(UTC, `Z`) 문자열로 내보냅니다.
//! - UUID는 하이픈이 포함된 표준 문자열 형식입니다.

use chrono::{DateTime, SecondsFormat, Utc};

pub mod onboarding;
pub mod vendors;

/// `2024-05-01T10:00:00Z` 형식
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_drops_fraction() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);

        assert_eq!(format_timestamp(&at), "2024-05-01T10:00:00Z");
    }
}
