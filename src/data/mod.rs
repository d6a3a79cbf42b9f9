// Static catalog data and lookups
pub mod catalog;
mod fixtures;

// Re-export commonly used types
pub use catalog::{CATALOG, CatalogError, CategoryCatalog};
