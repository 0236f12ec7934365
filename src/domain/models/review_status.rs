//! 온보딩 문서 리뷰 상태
//!
//! 상태 값은 반드시 [`ReviewStatus::parse`]를 거쳐 생성됩니다.
//! 상태 간 전이 규칙은 두지 않으며, 파싱된 어떤 상태든 이전 상태와 무관하게 기록됩니다.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::errors::AppError;

/// 벤더 문서 묶음에 부여되는 리뷰 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    /// 상태 미지정. 목록 조회에서는 "상태 필터 없음"을 의미합니다.
    #[default]
    Undefined,
    New,
    Approved,
    Rejected,
    Reviewing,
    Checking,
}

impl ReviewStatus {
    /// 모든 상태 값 (정렬 순서 포함)
    pub const ALL: [ReviewStatus; 6] = [
        ReviewStatus::Undefined,
        ReviewStatus::New,
        ReviewStatus::Approved,
        ReviewStatus::Rejected,
        ReviewStatus::Reviewing,
        ReviewStatus::Checking,
    ];

    /// 문자열 토큰을 상태로 변환합니다.
    ///
    /// 대소문자를 구분하지 않으며 앞뒤 공백은 무시합니다.
    /// 빈 문자열은 `Undefined`로 해석됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 알 수 없는 토큰
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(ReviewStatus::parse("Approved")?, ReviewStatus::Approved);
    /// assert!(ReviewStatus::parse("archived").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "" | "undefined" => Ok(ReviewStatus::Undefined),
            "new" => Ok(ReviewStatus::New),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            "reviewing" => Ok(ReviewStatus::Reviewing),
            "checking" => Ok(ReviewStatus::Checking),
            other => Err(AppError::BadRequest(format!("Bad status: `{}`", other))),
        }
    }

    /// 정규화된 소문자 토큰
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Undefined => "undefined",
            ReviewStatus::New => "new",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Checking => "checking",
        }
    }

    /// 필터로 사용할 때 "전체"를 의미하는지 여부
    pub fn is_undefined(&self) -> bool {
        matches!(self, ReviewStatus::Undefined)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReviewStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReviewStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ReviewStatus::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_serialize_is_identity() {
        for status in ReviewStatus::ALL {
            let token = status.as_str();
            assert_eq!(ReviewStatus::parse(token).unwrap().as_str(), token);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ReviewStatus::parse("Approved").unwrap(), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::parse("  REVIEWING ").unwrap(), ReviewStatus::Reviewing);
        assert_eq!(ReviewStatus::parse("").unwrap(), ReviewStatus::Undefined);
    }

    #[test]
    fn test_unknown_token_is_bad_request() {
        for token in ["archived", "approve", "new!", "0"] {
            match ReviewStatus::parse(token) {
                Err(AppError::BadRequest(msg)) => assert!(msg.contains("Bad status")),
                other => panic!("expected BadRequest for {token}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&ReviewStatus::Checking).unwrap();
        assert_eq!(json, "\"checking\"");

        let parsed: ReviewStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(parsed, ReviewStatus::Rejected);

        assert!(serde_json::from_str::<ReviewStatus>("\"done\"").is_err());
    }
}
