//! # Core Module
//!
//! - [`errors`] - 애플리케이션 전역 에러 타입 `AppError`와 HTTP 응답 변환
//! - [`state`] - 저장소 백엔드를 골라 서비스들을 조립하는 `AppState`
//!
//! ```rust,ignore
//! let state = AppState::in_memory();
//!
//! App::new()
//!     .configure(|cfg| state.configure(cfg))
//!     .configure(configure_all_routes)
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::AppState;
