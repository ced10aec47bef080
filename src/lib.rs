#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod surface;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{BookingService, HttpBookingService};
pub use domain::{GraphModel, ViewRole};
pub use engine::{AppContext, RailController};
pub use ui::RailConsoleApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::NETWORK;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display role; overrides the saved session
    #[arg(long, value_enum)]
    pub role: Option<ViewRole>,

    /// Base URL of the routing/booking service
    #[arg(long, default_value_t = NETWORK.base_url.to_string())]
    pub api_url: String,

    /// Interval between probe-then-sync cycles
    #[arg(long, default_value_t = NETWORK.poll_interval_ms)]
    pub poll_interval_ms: u64,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, ctx: AppContext) -> Box<dyn eframe::App> {
    let app = ui::RailConsoleApp::new(cc, ctx);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_and_overrides() {
        let cli = Cli::parse_from(["rail-console"]);
        assert_eq!(cli.role, None);
        assert_eq!(cli.api_url, NETWORK.base_url);
        assert_eq!(cli.poll_interval_ms, NETWORK.poll_interval_ms);

        let cli = Cli::parse_from([
            "rail-console",
            "--role",
            "admin",
            "--api-url",
            "http://10.0.0.2:9000",
            "--poll-interval-ms",
            "2500",
        ]);
        assert_eq!(cli.role, Some(ViewRole::Admin));
        assert_eq!(cli.api_url, "http://10.0.0.2:9000");
        assert_eq!(cli.poll_interval_ms, 2_500);
    }
}
