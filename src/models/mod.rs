// Catalog models: pure data, independent of UI/visualization

pub mod category;
pub mod result_record;

// Re-export key types for convenience
pub use category::{
    Category, ItemTrend, PriceTick, Subcategory, SubcategoryAction, SubcategoryIcon, TickKind,
};
pub use result_record::ResultRecord;
