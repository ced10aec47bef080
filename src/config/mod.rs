//! Configuration module for the rail console.

pub mod animation;
pub mod layout;
pub mod network;

mod debug; // Private; use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use animation::ANIMATION;
pub use layout::{DEFAULT_ROUTES, DEFAULT_STATIONS, MAP_GEOMETRY};
pub use network::NETWORK;
pub use persistence::{APP_STATE_PATH, SESSION_PATH};
