pub mod vendor_repo;

pub use vendor_repo::VendorRepository;
