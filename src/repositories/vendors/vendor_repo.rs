//! # 벤더 리포지토리
//!
//! `vendors` 컬렉션. `domain3`는 유니크 인덱스로 보호됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime as BsonDateTime, doc},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::vendors::Vendor;
use crate::domain::models::{Page, PageRequest};
use crate::repositories::{
    VendorStore, collect_records, from_bson_datetime, parse_stored_uuid, to_bson_datetime,
};

const COLLECTION: &str = "vendors";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VendorRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    domain3: String,
    email: String,
    #[serde(default)]
    how_many_products: String,
    manager_id: String,
    #[serde(default)]
    users: Vec<String>,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<&Vendor> for VendorRecord {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: vendor.name.clone(),
            domain3: vendor.domain3.clone(),
            email: vendor.email.clone(),
            how_many_products: vendor.how_many_products.clone(),
            manager_id: vendor.manager_id.to_string(),
            users: vendor.users.iter().map(ToString::to_string).collect(),
            created_at: to_bson_datetime(&vendor.created_at),
            updated_at: to_bson_datetime(&vendor.updated_at),
        }
    }
}

impl VendorRecord {
    fn into_domain(self) -> AppResult<Vendor> {
        let users = self
            .users
            .iter()
            .map(|user| parse_stored_uuid(user))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Vendor {
            id: parse_stored_uuid(&self.id)?,
            name: self.name,
            domain3: self.domain3,
            email: self.email,
            how_many_products: self.how_many_products,
            manager_id: parse_stored_uuid(&self.manager_id)?,
            users,
            created_at: from_bson_datetime(self.created_at),
            updated_at: from_bson_datetime(self.updated_at),
        })
    }
}

/// 유니크 인덱스 위반은 409, 그 외는 DB 에러
fn map_write_error(error: mongodb::error::Error, domain3: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
        if write_error.code == DUPLICATE_KEY {
            return AppError::ConflictError(format!("Domain `{}` is already taken", domain3));
        }
    }
    AppError::DatabaseError(error.to_string())
}

pub struct VendorRepository {
    db: Arc<Database>,
}

impl VendorRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<VendorRecord> {
        self.db.get_database().collection(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let domain_index = IndexModel::builder()
            .keys(doc! { "domain3": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("domain3_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_asc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([domain_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl VendorStore for VendorRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vendor>> {
        self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(VendorRecord::into_domain)
            .transpose()
    }

    async fn find_by_domain3(&self, domain3: &str) -> AppResult<Option<Vendor>> {
        self.collection()
            .find_one(doc! { "domain3": domain3 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(VendorRecord::into_domain)
            .transpose()
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<Page<Vendor>> {
        let total = self
            .collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if page.limit == 0 {
            return Ok(Page::new(Vec::new(), total));
        }

        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "created_at": 1, "_id": 1 })
            .skip(page.offset)
            .limit(page.mongo_limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let items = collect_records(cursor, VendorRecord::into_domain).await?;
        Ok(Page::new(items, total))
    }

    async fn insert(&self, vendor: &Vendor) -> AppResult<()> {
        self.collection()
            .insert_one(VendorRecord::from(vendor))
            .await
            .map_err(|e| map_write_error(e, &vendor.domain3))?;

        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> AppResult<bool> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": vendor.id.to_string() }, VendorRecord::from(vendor))
            .await
            .map_err(|e| map_write_error(e, &vendor.domain3))?;

        Ok(result.matched_count > 0)
    }
}
