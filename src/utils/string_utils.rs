//! # 문자열 유틸리티
//!
//! 쿼리 파라미터 정리와 검색어 매칭에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// `None`이거나 공백뿐인 값은 `None`으로, 나머지는 앞뒤 공백을 제거해 돌려줍니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 본문과 쿼리 스트링 모두에서 빈 문자열을 `None`으로 취급합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
///
/// ```rust,ignore
/// // ?name=  Pixel  → Some("Pixel")
/// // ?name=         → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 사용자 입력을 MongoDB `$regex`에 리터럴로 넣을 수 있도록 이스케이프합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 대소문자를 무시한 부분 문자열 검색
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
