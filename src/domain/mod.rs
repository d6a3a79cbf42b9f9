pub mod category_id;
pub mod sort_key;

// Re-export main types
pub use category_id::CategoryId;
pub use sort_key::SortKey;
