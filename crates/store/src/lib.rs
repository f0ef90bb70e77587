//! Catalog storage for ReWear. Everything is held in memory; fixtures are
//! bundled with the crate or read from a JSON file.

pub mod catalog;
pub mod error;

pub use catalog::CatalogStore;
pub use error::{StoreError, StoreResult};
