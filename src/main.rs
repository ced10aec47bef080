#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use rail_console::config::{APP_STATE_PATH, SESSION_PATH};
use rail_console::engine::resolve_role;
use rail_console::ui::config::UI_TEXT;
use rail_console::{AppContext, Cli, GraphModel, HttpBookingService, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Process-wide context, built once
    let session_path = PathBuf::from(SESSION_PATH);
    let role = resolve_role(args.role, &session_path);
    let service = HttpBookingService::new(&args.api_url)
        .with_context(|| format!("building HTTP client for {}", args.api_url))?;
    let ctx = AppContext::new(
        role,
        GraphModel::default_network(),
        Arc::new(service),
        args.poll_interval_ms,
        session_path,
    );

    // D. Runtime for the background requests; promises spawn onto it
    let rt = Runtime::new().context("creating Tokio runtime")?;
    let _guard = rt.enter();

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, ctx))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
