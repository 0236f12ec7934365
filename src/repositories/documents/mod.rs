pub mod documents_repo;

pub use documents_repo::DocumentsRepository;
