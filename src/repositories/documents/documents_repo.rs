//! # 온보딩 문서 리포지토리
//!
//! `vendor_documents` 컬렉션에 벤더당 한 건의 문서를 저장합니다.
//! 단건 조회는 Redis에 10분간 캐시합니다.
//!
//! - 쓰기 경로는 갱신된 문서를 캐시에 덮어씁니다. 실패하면 키를 지웁니다.
//! - 조회 경로는 키가 없을 때만 채웁니다 (`SET NX`). 늦게 끝난 조회가 최신 값을 덮지 않습니다.
//! - 제출은 `$set`/`$setOnInsert`로 처리하므로 리뷰 상태가 캐시를 거쳐 다시 쓰이지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime as BsonDateTime, Document, doc, to_bson},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::config::StorageConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::onboarding::{Company, Contact, DocumentsInfo};
use crate::domain::models::{Page, PageRequest, ReviewSort, ReviewStatus};
use crate::repositories::{
    DocumentsStore, ReviewFilter, collect_records, from_bson_datetime, parse_stored_uuid,
    to_bson_datetime,
};
use crate::utils::string_utils::escape_regex;

const COLLECTION: &str = "vendor_documents";

/// MongoDB 저장 형식
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentsRecord {
    vendor_id: String,
    #[serde(default)]
    company: Company,
    #[serde(default)]
    contact: Contact,
    review_status: String,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<&DocumentsInfo> for DocumentsRecord {
    fn from(doc: &DocumentsInfo) -> Self {
        Self {
            vendor_id: doc.vendor_id.to_string(),
            company: doc.company.clone(),
            contact: doc.contact.clone(),
            review_status: doc.review_status.as_str().to_string(),
            created_at: to_bson_datetime(&doc.created_at),
            updated_at: to_bson_datetime(&doc.updated_at),
        }
    }
}

impl DocumentsRecord {
    fn into_domain(self) -> AppResult<DocumentsInfo> {
        let review_status = ReviewStatus::parse(&self.review_status)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(DocumentsInfo {
            vendor_id: parse_stored_uuid(&self.vendor_id)?,
            company: self.company,
            contact: self.contact,
            review_status,
            created_at: from_bson_datetime(self.created_at),
            updated_at: from_bson_datetime(self.updated_at),
        })
    }
}

fn review_filter_document(filter: &ReviewFilter) -> Document {
    let mut query = doc! {};

    if !filter.status.is_undefined() {
        query.insert("review_status", filter.status.as_str());
    }
    if let Some(name) = filter.name.as_deref() {
        query.insert(
            "company.name",
            doc! { "$regex": escape_regex(name), "$options": "i" },
        );
    }

    query
}

/// 제출용 upsert 문서. 리뷰 상태와 생성 시각은 새로 만들 때만 씁니다.
fn submission_update(
    company: &Company,
    contact: &Contact,
    submitted_at: &DateTime<Utc>,
) -> AppResult<Document> {
    let submitted_at = to_bson_datetime(submitted_at);

    Ok(doc! {
        "$set": {
            "company": to_bson(company).context("Mapping company document")?,
            "contact": to_bson(contact).context("Mapping contact document")?,
            "updated_at": submitted_at,
        },
        "$setOnInsert": {
            "review_status": ReviewStatus::New.as_str(),
            "created_at": submitted_at,
        },
    })
}

pub struct DocumentsRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    cache_ttl: u64,
}

impl DocumentsRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            cache_ttl: StorageConfig::documents_cache_ttl(),
        }
    }

    fn collection(&self) -> Collection<DocumentsRecord> {
        self.db.get_database().collection(COLLECTION)
    }

    fn cache_key(&self, vendor_id: Uuid) -> String {
        format!("documents:{}", vendor_id)
    }

    /// 쓰기 직후 최신 문서로 캐시를 덮어씁니다. 실패하면 키를 지워 다음 조회가 DB를 읽게 합니다.
    async fn refresh_cache(&self, documents: &DocumentsInfo) {
        let cache_key = self.cache_key(documents.vendor_id);

        if let Err(e) = self
            .redis
            .set_with_expiry(&cache_key, documents, self.cache_ttl)
            .await
        {
            warn!("⚠️ 문서 캐시 갱신 실패, 키 삭제 시도: {} ({})", cache_key, e);
            if let Err(e) = self.redis.del(&cache_key).await {
                warn!("⚠️ 문서 캐시 무효화 실패: {} ({})", cache_key, e);
            }
        }
    }

    /// `vendor_id`로 찾아 갱신하고 갱신 후 문서를 돌려줍니다.
    async fn find_and_update(
        &self,
        vendor_id: Uuid,
        update: Document,
        upsert: bool,
    ) -> AppResult<Option<DocumentsInfo>> {
        let record = self
            .collection()
            .find_one_and_update(doc! { "vendor_id": vendor_id.to_string() }, update)
            .upsert(upsert)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents = record.map(DocumentsRecord::into_domain).transpose()?;
        if let Some(ref documents) = documents {
            self.refresh_cache(documents).await;
        }

        Ok(documents)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let vendor_index = IndexModel::builder()
            .keys(doc! { "vendor_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("vendor_id_unique".to_string())
                    .build(),
            )
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "review_status": 1, "updated_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("review_status_updated_at".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([vendor_index, status_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DocumentsStore for DocumentsRepository {
    async fn find_by_vendor(&self, vendor_id: Uuid) -> AppResult<Option<DocumentsInfo>> {
        let cache_key = self.cache_key(vendor_id);

        if let Ok(Some(cached)) = self.redis.get::<DocumentsInfo>(&cache_key).await {
            return Ok(Some(cached));
        }

        let record = self
            .collection()
            .find_one(doc! { "vendor_id": vendor_id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents = record.map(DocumentsRecord::into_domain).transpose()?;

        if let Some(ref documents) = documents {
            if let Err(e) = self
                .redis
                .set_if_absent_with_expiry(&cache_key, documents, self.cache_ttl)
                .await
            {
                warn!("⚠️ 문서 캐시 저장 실패: {} ({})", cache_key, e);
            }
        }

        Ok(documents)
    }

    async fn find_page(
        &self,
        filter: &ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> AppResult<Page<DocumentsInfo>> {
        let query = review_filter_document(filter);

        let total = self
            .collection()
            .count_documents(query.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // MongoDB에서 limit 0은 무제한이므로 직접 처리
        if page.limit == 0 {
            return Ok(Page::new(Vec::new(), total));
        }

        let cursor = self
            .collection()
            .find(query)
            .sort(sort.mongo_sort())
            .skip(page.offset)
            .limit(page.mongo_limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let items = collect_records(cursor, DocumentsRecord::into_domain).await?;
        Ok(Page::new(items, total))
    }

    async fn submit(
        &self,
        vendor_id: Uuid,
        company: &Company,
        contact: &Contact,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<DocumentsInfo> {
        let update = submission_update(company, contact, &submitted_at)?;

        self.find_and_update(vendor_id, update, true)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("문서 upsert 결과 없음: {}", vendor_id)))
    }

    async fn update_status(
        &self,
        vendor_id: Uuid,
        status: ReviewStatus,
        updated_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let update = doc! { "$set": {
            "review_status": status.as_str(),
            "updated_at": to_bson_datetime(&updated_at),
        }};

        let updated = self.find_and_update(vendor_id, update, false).await?;
        Ok(updated.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_document_skips_undefined_status() {
        let filter = ReviewFilter::new(None, ReviewStatus::Undefined);
        assert!(review_filter_document(&filter).is_empty());
    }

    #[test]
    fn test_filter_document_escapes_name() {
        let filter = ReviewFilter::new(Some("a.b".to_string()), ReviewStatus::New);
        let query = review_filter_document(&filter);

        assert_eq!(query.get_str("review_status").unwrap(), "new");
        let name = query.get_document("company.name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"a\.b");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_submission_never_sets_status_on_existing_documents() {
        let company = Company {
            name: Some("Pixel Forge".to_string()),
            ..Company::default()
        };
        let update = submission_update(&company, &Contact::default(), &Utc::now()).unwrap();

        let set = update.get_document("$set").unwrap();
        assert!(set.contains_key("company"));
        assert!(set.contains_key("contact"));
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("review_status"));

        let on_insert = update.get_document("$setOnInsert").unwrap();
        assert_eq!(on_insert.get_str("review_status").unwrap(), "new");
        assert!(on_insert.contains_key("created_at"));
    }

    #[test]
    fn test_record_round_trip_keeps_status() {
        let mut documents = DocumentsInfo::submitted(
            Uuid::new_v4(),
            Company::default(),
            Contact::default(),
        );
        documents.review_status = ReviewStatus::Checking;

        let restored = DocumentsRecord::from(&documents).into_domain().unwrap();
        assert_eq!(restored.review_status, ReviewStatus::Checking);
        assert_eq!(restored.vendor_id, documents.vendor_id);
    }
}
