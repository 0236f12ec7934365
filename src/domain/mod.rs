//! # Domain Layer
//!
//! - [`entities`] - 저장되는 도메인 객체 (`DocumentsInfo`, `Notification`, `Vendor`)
//! - [`models`] - 계층 간에 공유하는 값 객체 (리뷰 상태, 페이지, 정렬, 라우트 소유자)
//! - [`dto`] - HTTP 요청/응답 구조
//!
//! 엔티티는 HTTP에 직접 노출하지 않고 항상 DTO로 변환합니다.

pub mod dto;
pub mod entities;
pub mod models;
