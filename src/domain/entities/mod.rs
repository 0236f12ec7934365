//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 저장소 구현과 무관한 순수 Rust 구조체이며,
//! MongoDB 문서 매핑은 각 리포지토리의 레코드 타입이 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (Vendor, DocumentsInfo, Notification)
//! ├── models/       ← 값 객체 (ReviewStatus, PageRequest, 정렬 키)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod notifications;
pub mod onboarding;
pub mod vendors;
