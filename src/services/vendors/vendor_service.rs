//! # 벤더 계정 서비스
//!
//! 벤더 생성 시 관리자(`manager_id`)가 첫 번째 구성원이 되며,
//! 수정 요청으로는 관리자와 구성원 목록을 바꿀 수 없습니다.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::vendors::{CreateVendorRequest, UpdateVendorRequest};
use crate::domain::entities::vendors::Vendor;
use crate::domain::models::{Page, PageRequest};
use crate::repositories::VendorStore;

pub struct VendorService {
    vendors: Arc<dyn VendorStore>,
}

impl VendorService {
    pub fn new(vendors: Arc<dyn VendorStore>) -> Self {
        Self { vendors }
    }

    pub async fn get_vendors(&self, page: PageRequest) -> AppResult<Page<Vendor>> {
        self.vendors.find_page(page).await
    }

    pub async fn get_vendor(&self, id: Uuid) -> AppResult<Vendor> {
        self.vendors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))
    }

    pub async fn create_vendor(&self, request: CreateVendorRequest) -> AppResult<Vendor> {
        let manager_id = request
            .manager_id
            .ok_or_else(|| AppError::UnprocessableEntity("managerId is required".to_string()))?;

        if self.vendors.find_by_domain3(&request.domain3).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "Domain `{}` is already taken",
                request.domain3
            )));
        }

        let vendor = Vendor::new(
            request.name,
            request.domain3,
            request.email,
            request.how_many_products,
            manager_id,
        );
        self.vendors.insert(&vendor).await?;

        info!("🏢 벤더 생성: id={} domain3={}", vendor.id, vendor.domain3);
        Ok(vendor)
    }

    pub async fn update_vendor(&self, id: Uuid, request: UpdateVendorRequest) -> AppResult<Vendor> {
        let existing = self.get_vendor(id).await?;

        if let Some(other) = self.vendors.find_by_domain3(&request.domain3).await? {
            if other.id != id {
                return Err(AppError::ConflictError(format!(
                    "Domain `{}` is already taken",
                    request.domain3
                )));
            }
        }

        let vendor = Vendor {
            name: request.name,
            domain3: request.domain3,
            email: request.email,
            how_many_products: request.how_many_products,
            updated_at: Utc::now(),
            ..existing
        };

        if !self.vendors.update(&vendor).await? {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        }

        info!("🏢 벤더 수정: id={}", vendor.id);
        Ok(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryVendorStore;

    fn service() -> VendorService {
        VendorService::new(Arc::new(MemoryVendorStore::new()))
    }

    fn create_request(domain3: &str) -> CreateVendorRequest {
        CreateVendorRequest {
            name: "Pixel Forge".to_string(),
            domain3: domain3.to_string(),
            email: "ops@pixelforge.io".to_string(),
            how_many_products: "1-5".to_string(),
            manager_id: Some(Uuid::new_v4()),
        }
    }

    #[tokio::test]
    async fn test_create_vendor_adds_manager_as_user() {
        let service = service();
        let request = create_request("pixelforge");
        let manager = request.manager_id.unwrap();

        let vendor = service.create_vendor(request).await.unwrap();

        assert_eq!(vendor.manager_id, manager);
        assert_eq!(vendor.users, vec![manager]);
        assert_eq!(service.get_vendor(vendor.id).await.unwrap(), vendor);
    }

    #[tokio::test]
    async fn test_duplicate_domain_is_conflict() {
        let service = service();
        service.create_vendor(create_request("taken")).await.unwrap();

        let result = service.create_vendor(create_request("taken")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_manager_and_created_at() {
        let service = service();
        let vendor = service.create_vendor(create_request("before")).await.unwrap();

        let updated = service
            .update_vendor(
                vendor.id,
                UpdateVendorRequest {
                    name: "Renamed".to_string(),
                    domain3: "after".to_string(),
                    email: "new@studio.io".to_string(),
                    how_many_products: "10+".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.manager_id, vendor.manager_id);
        assert_eq!(updated.users, vendor.users);
        assert_eq!(updated.created_at, vendor.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_vendor_is_not_found() {
        let result = service()
            .update_vendor(Uuid::new_v4(), UpdateVendorRequest::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
