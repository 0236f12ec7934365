use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 게임 퍼블리싱 회사 계정
///
/// `manager_id`는 벤더를 소유한 사용자이며 항상 `users`에 포함됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub domain3: String,
    pub email: String,
    pub how_many_products: String,
    pub manager_id: Uuid,
    pub users: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn new(
        name: String,
        domain3: String,
        email: String,
        how_many_products: String,
        manager_id: Uuid,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name,
            domain3,
            email,
            how_many_products,
            manager_id,
            users: vec![manager_id],
            created_at: now,
            updated_at: now,
        }
    }
}
