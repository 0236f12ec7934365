use serde::{Deserialize, Serialize};

use crate::domain::dto::format_timestamp;
use crate::domain::entities::vendors::Vendor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    pub id: String,
    pub name: String,
    pub domain3: String,
    pub email: String,
    pub how_many_products: String,
    pub manager_id: String,
    pub users: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Vendor> for VendorDto {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: vendor.name,
            domain3: vendor.domain3,
            email: vendor.email,
            how_many_products: vendor.how_many_products,
            manager_id: vendor.manager_id.to_string(),
            users: vendor.users.iter().map(ToString::to_string).collect(),
            created_at: format_timestamp(&vendor.created_at),
            updated_at: format_timestamp(&vendor.updated_at),
        }
    }
}
