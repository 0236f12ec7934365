//! 애플리케이션 서비스 구성
//!
//! 저장소 구현을 선택해 서비스들을 조립하고 actix `app_data`로 등록합니다.
//! 핸들러는 `web::Data<VendorService>`처럼 필요한 서비스만 받습니다.

use std::sync::Arc;

use actix_web::web;
use log::info;

use crate::caching::redis::RedisClient;
use crate::config::StorageBackend;
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::repositories::documents::DocumentsRepository;
use crate::repositories::memory::{MemoryDocumentsStore, MemoryNotificationStore, MemoryVendorStore};
use crate::repositories::notifications::NotificationRepository;
use crate::repositories::vendors::VendorRepository;
use crate::repositories::{DocumentsStore, NotificationStore, VendorStore};
use crate::services::notifications::{NotificationDispatcher, NotificationService};
use crate::services::onboarding::AdminOnboardingService;
use crate::services::vendors::VendorService;

#[derive(Clone)]
pub struct AppState {
    pub vendors: Arc<VendorService>,
    pub onboarding: Arc<AdminOnboardingService>,
    pub notifications: Arc<NotificationService>,
    pub dispatcher: NotificationDispatcher,
    pub backend: StorageBackend,
}

impl AppState {
    /// 서비스 수 (기동 요약 출력용)
    pub const SERVICE_COUNT: usize = 3;

    /// 주어진 저장소로 서비스를 조립합니다. 알림 워커가 현재 런타임에 생성됩니다.
    pub fn from_stores(
        documents: Arc<dyn DocumentsStore>,
        notifications: Arc<dyn NotificationStore>,
        vendors: Arc<dyn VendorStore>,
        backend: StorageBackend,
    ) -> Self {
        let notification_service = Arc::new(NotificationService::new(notifications));
        let dispatcher = NotificationDispatcher::spawn(notification_service.clone());

        Self {
            vendors: Arc::new(VendorService::new(vendors.clone())),
            onboarding: Arc::new(AdminOnboardingService::new(
                documents,
                vendors,
                dispatcher.clone(),
            )),
            notifications: notification_service,
            dispatcher,
            backend,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(MemoryDocumentsStore::new()),
            Arc::new(MemoryNotificationStore::new()),
            Arc::new(MemoryVendorStore::new()),
            StorageBackend::Memory,
        )
    }

    /// MongoDB/Redis에 연결하고 인덱스를 생성합니다.
    pub async fn connect() -> AppResult<Self> {
        info!("📡 데이터베이스 연결 중...");

        let database = Arc::new(Database::new().await?);
        let redis = Arc::new(RedisClient::new().await?);

        let documents = DocumentsRepository::new(database.clone(), redis);
        let notifications = NotificationRepository::new(database.clone());
        let vendors = VendorRepository::new(database.clone());

        documents.create_indexes().await?;
        notifications.create_indexes().await?;
        vendors.create_indexes().await?;
        info!("✅ 인덱스 생성 완료: {}", database.database_name());

        Ok(Self::from_stores(
            Arc::new(documents),
            Arc::new(notifications),
            Arc::new(vendors),
            StorageBackend::Mongo,
        ))
    }

    pub async fn for_backend(backend: StorageBackend) -> AppResult<Self> {
        match backend {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::Mongo => Self::connect().await,
        }
    }

    /// 서비스들을 `app_data`로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.vendors.clone()))
            .app_data(web::Data::from(self.onboarding.clone()))
            .app_data(web::Data::from(self.notifications.clone()))
            .app_data(web::Data::new(self.backend));
    }
}
