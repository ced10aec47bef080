//! File persistence configuration

/// Session marker written by the login screen and cleared on logout
pub const SESSION_PATH: &str = ".rail_session.json";

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".rail_console_state.json";
