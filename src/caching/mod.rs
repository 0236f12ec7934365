//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시입니다. 현재는 벤더 문서 조회
//! (`documents:{vendor_id}`)에만 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
