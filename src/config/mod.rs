//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽으며, `PROFILE`에 따라 `.env.dev` / `.env.prod`가
//! 먼저 로드됩니다 (`main.rs` 참조).
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` | `production` |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` |
//! | `STORAGE_BACKEND` | `mongodb` (`ENVIRONMENT=test`이면 `memory`) |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `publisher_admin_dev` |
//! | `REDIS_URL` | `redis://localhost:6379` |
//! | `DOCUMENTS_CACHE_TTL` | `600` |

pub mod data_config;

pub use data_config::*;
