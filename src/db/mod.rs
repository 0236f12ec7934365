//! MongoDB 연결 관리
//!
//! 애플리케이션 전체가 공유하는 MongoDB 클라이언트 핸들입니다.
//! `mongodb::Client`는 내부적으로 커넥션 풀을 가지므로 복제 비용이 작습니다.
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017
//! DATABASE_NAME=publisher_admin_dev
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::StorageConfig;
use crate::core::errors::AppError;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 연결하고 `ping`으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, AppError> {
        Self::connect(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await
    }

    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some("publisher_admin".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
