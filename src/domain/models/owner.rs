use std::fmt;
use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::core::errors::AppError;

/// 와일드카드 소유자 ("권한 있는 모든 관리자")
pub const OWNER_ANY: &str = "*";

/// 벤더 스코프 경로 파라미터 이름
pub const VENDOR_ID_PARAM: &str = "vendorId";

/// 라우트별 권한 소유자
///
/// 매칭된 라우트 패턴에 `{vendorId}` 세그먼트가 있으면 해당 벤더가 소유자가 되고,
/// 그 외 라우트는 와일드카드 소유자로 해석됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOwner {
    Any,
    Vendor(Uuid),
}

impl RouteOwner {
    /// 라우트 패턴과 경로 파라미터로 소유자를 결정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 벤더 스코프 라우트인데 ID가 UUID가 아닌 경우
    pub fn resolve(pattern: Option<&str>, vendor_param: Option<&str>) -> Result<Self, AppError> {
        let placeholder = format!("{{{}}}", VENDOR_ID_PARAM);

        match pattern {
            Some(pattern) if pattern.contains(&placeholder) => {
                let raw = vendor_param.unwrap_or_default();
                Uuid::parse_str(raw)
                    .map(RouteOwner::Vendor)
                    .map_err(|e| AppError::BadRequest(format!("Bad id: {}", e)))
            }
            _ => Ok(RouteOwner::Any),
        }
    }

    /// 벤더 스코프 라우트의 벤더 ID
    pub fn vendor_id(&self) -> Result<Uuid, AppError> {
        match self {
            RouteOwner::Vendor(id) => Ok(*id),
            RouteOwner::Any => Err(AppError::InternalError(
                "route is not scoped to a vendor".to_string(),
            )),
        }
    }
}

impl fmt::Display for RouteOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOwner::Any => f.write_str(OWNER_ANY),
            RouteOwner::Vendor(id) => write!(f, "{}", id),
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for RouteOwner {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let pattern = req.match_pattern();
        ready(Self::resolve(
            pattern.as_deref(),
            req.match_info().get(VENDOR_ID_PARAM),
        ))
    }
}
