//! 벤더 계정 핸들러

use actix_web::{HttpResponse, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::vendors::{
    CreateVendorRequest, UpdateVendorRequest, VendorDto, VendorListQuery,
};
use crate::domain::models::RouteOwner;
use crate::handlers::page_response;
use crate::services::vendors::VendorService;

/// 벤더 목록. 잘못된 `limit`/`offset`은 기본값으로 대체됩니다.
#[get("")]
pub async fn get_vendors(
    query: web::Query<VendorListQuery>,
    service: web::Data<VendorService>,
) -> Result<HttpResponse, AppError> {
    let page = service.get_vendors(query.page()).await?;

    Ok(page_response(page, VendorDto::from))
}

#[get("/{vendorId}")]
pub async fn get_vendor(
    owner: RouteOwner,
    service: web::Data<VendorService>,
) -> Result<HttpResponse, AppError> {
    let vendor = service.get_vendor(owner.vendor_id()?).await?;

    Ok(HttpResponse::Ok().json(VendorDto::from(vendor)))
}

#[post("")]
pub async fn create_vendor(
    payload: web::Json<CreateVendorRequest>,
    service: web::Data<VendorService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let vendor = service.create_vendor(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(VendorDto::from(vendor)))
}

#[put("/{vendorId}")]
pub async fn update_vendor(
    owner: RouteOwner,
    payload: web::Json<UpdateVendorRequest>,
    service: web::Data<VendorService>,
) -> Result<HttpResponse, AppError> {
    let vendor_id = owner.vendor_id()?;

    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let vendor = service.update_vendor(vendor_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(VendorDto::from(vendor)))
}
