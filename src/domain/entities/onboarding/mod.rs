//! 온보딩 문서 엔티티

pub mod documents_info;

pub use documents_info::{Company, Contact, ContactPerson, DocumentsInfo};
