//! # Application Error Handling System
//!
//! 관리자 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `actix_web::ResponseError` 구현이 중앙에서 JSON 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "message": "Bad id", "code": 400 }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `BadRequest` | 400 Bad Request | 잘못된 ID, 쿼리 파라미터, 상태 토큰 |
//! | `UnprocessableEntity` | 422 Unprocessable Entity | 요청 본문 필드 검증 실패 |
//! | `NotFound` | 404 Not Found | 벤더/문서 없음 |
//! | `ConflictError` | 409 Conflict | 중복 데이터 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 (메시지 비공개) |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 (메시지 비공개) |
//! | `InternalError` | 500 Internal Server Error | DTO 매핑 실패 등 |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층은 도메인 의미에 맞는 변형을 선택하고,
/// 핸들러는 `?` 연산자로 그대로 전파합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 클라이언트에게는 상세 내용을 노출하지 않고 로그에만 기록합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 잘못된 요청 (400)
    ///
    /// # 발생 시나리오
    /// - UUID 형식이 아닌 벤더 ID
    /// - 정수로 파싱할 수 없는 `limit`/`offset`
    /// - 알 수 없는 리뷰 상태 토큰
    /// - JSON 본문 파싱 실패
    #[error("{0}")]
    BadRequest(String),

    /// 요청 본문 필드 검증 실패 (422)
    #[error("{0}")]
    UnprocessableEntity(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("{0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지
    ///
    /// 인프라 에러는 원인을 숨기고 표준 상태 문구만 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::RedisError(_) => self
                .status_code()
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string(),
            AppError::BadRequest(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::InternalError(msg) => msg.clone(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// `{message, code}` 형태의 JSON 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::debug!("요청 처리 실패 ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "message": self.public_message(),
            "code": status.as_u16(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `InternalError`로 변환하는 확장 trait (bson 매핑 등)
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
