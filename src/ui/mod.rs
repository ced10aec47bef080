// User interface components
pub mod app;
mod app_async;
pub mod config;
pub mod styles;
pub mod ui_map;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::RailConsoleApp;
pub use config::UI_CONFIG;
