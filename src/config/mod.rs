//! Configuration module for the OneCart+ application.

pub mod search;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use persistence::APP_STATE_PATH;
pub use search::{RANKING, SEARCH, SearchConfig};
