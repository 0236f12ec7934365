//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 백엔드 설정을 환경 변수에서 읽습니다.

use std::env;
use std::fmt;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 문서, 알림, 벤더 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB + Redis 캐시
    Mongo,
    /// 프로세스 메모리. 재시작하면 데이터가 사라집니다.
    Memory,
}

impl StorageBackend {
    /// `STORAGE_BACKEND` 값. 테스트 환경의 기본값은 `memory`, 그 외는 `mongodb`입니다.
    pub fn current() -> Self {
        match env::var("STORAGE_BACKEND") {
            Ok(value) => Self::from_str(&value),
            Err(_) => Self::default_for_env(&Environment::current()),
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    pub fn default_for_env(env: &Environment) -> Self {
        match env {
            Environment::Test => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Mongo => f.write_str("mongodb"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// MongoDB / Redis 접속 설정
pub struct StorageConfig;

impl StorageConfig {
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "publisher_admin_dev".to_string())
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 벤더 문서 캐시 TTL(초). 기본값: 600 (`DOCUMENTS_CACHE_TTL`)
    pub fn documents_cache_ttl() -> u64 {
        env::var("DOCUMENTS_CACHE_TTL")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(600)
    }
}
