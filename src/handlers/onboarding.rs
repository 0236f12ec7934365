//! 관리자 온보딩 리뷰 핸들러
//!
//! 모든 경로는 `/api/v1/vendors` 스코프 아래에 있습니다.
//! `{vendorId}`가 있는 경로는 [`RouteOwner`]로 벤더 ID를 얻으며,
//! UUID가 아니면 `400 Bad id`를 돌려줍니다.

use actix_web::{HttpResponse, get, post, put, web};
use log::debug;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::onboarding::{
    ChangeStatusRequest, DocumentsInfoDto, MessageListQuery, NotificationDto, NotificationRequest,
    ReviewListQuery, ShortDocumentsInfoDto, SubmitDocumentsRequest,
};
use crate::domain::entities::notifications::NewNotification;
use crate::domain::models::{ReviewStatus, RouteOwner};
use crate::handlers::page_response;
use crate::services::notifications::NotificationService;
use crate::services::onboarding::AdminOnboardingService;

/// 리뷰 요청 목록
///
/// `GET /reviews?limit=20&offset=0&name=pixel&status=new&sort=-updatedAt`
#[get("/reviews")]
pub async fn get_reviews(
    owner: RouteOwner,
    query: web::Query<ReviewListQuery>,
    service: web::Data<AdminOnboardingService>,
) -> Result<HttpResponse, AppError> {
    debug!("리뷰 목록 조회: owner={}", owner);

    let page = query.page()?;
    let status = query.status()?;
    let page = service
        .get_requests(page, query.name.clone(), status, query.sort())
        .await?;

    Ok(page_response(page, ShortDocumentsInfoDto::from))
}

#[get("/{vendorId}/documents")]
pub async fn get_documents(
    owner: RouteOwner,
    service: web::Data<AdminOnboardingService>,
) -> Result<HttpResponse, AppError> {
    let documents = service.get_for_vendor(owner.vendor_id()?).await?;

    Ok(HttpResponse::Ok().json(DocumentsInfoDto::from(documents)))
}

/// 벤더 문서 제출/갱신
#[put("/{vendorId}/documents")]
pub async fn submit_documents(
    owner: RouteOwner,
    payload: web::Json<SubmitDocumentsRequest>,
    service: web::Data<AdminOnboardingService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let request = payload.into_inner();
    let documents = service
        .submit_documents(owner.vendor_id()?, request.company, request.contact)
        .await?;

    Ok(HttpResponse::Ok().json(DocumentsInfoDto::from(documents)))
}

/// 리뷰 상태 변경
///
/// 본문: `{"status": "approved", "message": "Welcome aboard"}`.
/// 메시지가 있으면 벤더에게 알림이 비동기로 전송됩니다.
#[put("/{vendorId}/documents/status")]
pub async fn change_status(
    owner: RouteOwner,
    payload: web::Json<ChangeStatusRequest>,
    service: web::Data<AdminOnboardingService>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = owner.vendor_id()?;

    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
    let status = ReviewStatus::parse(&payload.status)?;

    service
        .change_status(vendor_id, status, Some(payload.message.as_str()))
        .await?;

    Ok(HttpResponse::Ok().json(""))
}

#[post("/{vendorId}/messages")]
pub async fn send_message(
    owner: RouteOwner,
    payload: web::Json<NotificationRequest>,
    service: web::Data<NotificationService>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = owner.vendor_id()?;

    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let request = payload.into_inner();
    let notification = service
        .send_notification(NewNotification::new(vendor_id, request.title, request.message))
        .await?;

    Ok(HttpResponse::Ok().json(NotificationDto::from(notification)))
}

/// 벤더 메시지 목록
///
/// `GET /{vendorId}/messages?limit=20&offset=0&query=tax&sort=-createdAt`
#[get("/{vendorId}/messages")]
pub async fn get_messages(
    owner: RouteOwner,
    query: web::Query<MessageListQuery>,
    service: web::Data<NotificationService>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = owner.vendor_id()?;
    let page = query.page()?;

    let page = service
        .get_notifications(vendor_id, page, query.query.as_deref(), query.sort())
        .await?;

    Ok(page_response(page, NotificationDto::from))
}
