//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait(`Arc<dyn ...Store>`)에만 의존하며, 구성은
//! [`AppState`](crate::core::state::AppState)가 담당합니다.
//!
//! - [`onboarding`] - 관리자 온보딩 리뷰 (상태 변경, 문서 조회, 리뷰 목록)
//! - [`notifications`] - 벤더 알림 저장/조회와 비동기 발송 큐
//! - [`vendors`] - 벤더 계정 관리

pub mod notifications;
pub mod onboarding;
pub mod vendors;
