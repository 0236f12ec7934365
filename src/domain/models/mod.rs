//! # Domain Models Module
//!
//! 엔티티는 아니지만 여러 계층에서 공유하는 값 객체들입니다.
//!
//! - [`review_status`] - 온보딩 리뷰 상태와 파서
//! - [`pagination`] - offset/limit 페이지 요청과 결과
//! - [`sorting`] - 목록 정렬 키
//! - [`owner`] - 라우트별 권한 소유자 추출자

pub mod owner;
pub mod pagination;
pub mod review_status;
pub mod sorting;

pub use owner::RouteOwner;
pub use pagination::{Page, PageRequest};
pub use review_status::ReviewStatus;
pub use sorting::{NotificationSort, ReviewSort};
