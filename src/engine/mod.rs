pub mod core;
pub mod messages;
pub mod state;
pub mod timer;

// Re-export key components
pub use core::{NavigationEngine, compose_option_query, compose_route_query};
pub use messages::{NavEvent, Transition};
pub use state::{NavView, NavigationState};
pub use timer::{SearchTicket, SearchTimer};
