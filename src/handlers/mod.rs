//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청 파싱/검증과 DTO 변환만 담당하고 비즈니스 로직은 서비스에 위임합니다.
//!
//! - [`onboarding`] - 관리자 온보딩 리뷰와 벤더 메시지
//! - [`vendors`] - 벤더 계정 CRUD

pub mod onboarding;
pub mod vendors;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::models::Page;
use crate::domain::models::pagination::ITEMS_COUNT_HEADER;

/// 목록 응답. 본문은 배열이고 전체 개수는 `X-Items-Count` 헤더로 전달합니다.
pub(crate) fn page_response<T, D, F>(page: Page<T>, to_dto: F) -> HttpResponse
where
    D: Serialize,
    F: FnMut(T) -> D,
{
    let page = page.map(to_dto);

    HttpResponse::Ok()
        .insert_header((ITEMS_COUNT_HEADER, page.total.to_string()))
        .json(page.items)
}
