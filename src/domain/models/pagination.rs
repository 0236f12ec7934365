//! 페이지네이션 모델
//!
//! 목록 API는 항목 배열을 본문으로, 전체 개수를 `X-Items-Count` 헤더로 전달합니다.

use crate::core::errors::AppError;

/// 기본 페이지 크기
pub const DEFAULT_LIMIT: u64 = 20;

/// 전체 개수를 담는 응답 헤더 이름
pub const ITEMS_COUNT_HEADER: &str = "X-Items-Count";

/// offset/limit 기반 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// 쿼리 문자열 값으로부터 페이지 요청을 만듭니다.
    ///
    /// 값이 없으면 기본값(20/0)을 사용하고, 정수가 아니거나 음수이면 400을 반환합니다.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, AppError> {
        let mut page = Self::default();

        if let Some(raw) = offset {
            page.offset = parse_non_negative(raw, "Bad offset")?;
        }

        if let Some(raw) = limit {
            page.limit = parse_non_negative(raw, "Bad limit")?;
        }

        Ok(page)
    }

    /// 파싱에 실패한 값은 기본값으로 대체합니다. (벤더 목록 API)
    pub fn parse_lenient(limit: Option<&str>, offset: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            limit: limit
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.limit),
            offset: offset
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.offset),
        }
    }

    /// MongoDB `limit` 값. 음수는 단일 배치를 뜻하므로 `i64::MAX`에서 자릅니다.
    pub fn mongo_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// 메모리 슬라이스에 페이지를 적용합니다.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(usize::try_from(self.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect()
    }
}

fn parse_non_negative(raw: &str, message: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| AppError::BadRequest(format!("{}: {}", message, e)))
}

/// 한 페이지의 항목과 필터에 맞는 전체 개수
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(PageRequest::parse(None, None).unwrap(), PageRequest::new(20, 0));
    }

    #[test]
    fn test_parse_values() {
        let page = PageRequest::parse(Some("5"), Some("10")).unwrap();
        assert_eq!(page, PageRequest::new(5, 10));
    }

    #[test]
    fn test_unparsable_values_are_bad_request() {
        assert!(matches!(
            PageRequest::parse(Some("abc"), None),
            Err(AppError::BadRequest(msg)) if msg.starts_with("Bad limit")
        ));
        assert!(matches!(
            PageRequest::parse(None, Some("-1")),
            Err(AppError::BadRequest(msg)) if msg.starts_with("Bad offset")
        ));
    }

    #[test]
    fn test_lenient_parse_falls_back() {
        let page = PageRequest::parse_lenient(Some("x"), Some("3"));
        assert_eq!(page, PageRequest::new(20, 3));
    }

    #[test]
    fn test_huge_limit_is_clamped_for_mongo() {
        assert_eq!(PageRequest::new(u64::MAX, 0).mongo_limit(), i64::MAX);

        let page = PageRequest::parse(Some("18446744073709551615"), None).unwrap();
        assert_eq!(page.mongo_limit(), i64::MAX);
        assert_eq!(PageRequest::default().mongo_limit(), 20);
    }

    #[test]
    fn test_apply_with_zero_limit_is_empty() {
        let page = PageRequest::new(0, 0);
        assert!(page.apply(vec![1, 2, 3]).is_empty());

        let page = PageRequest::new(2, 1);
        assert_eq!(page.apply(vec![1, 2, 3, 4]), vec![2, 3]);
    }
}
