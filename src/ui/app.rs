use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::data::{ServiceError, clear_session};
use crate::domain::{BookingReceipt, ProcessOutcome, RouteQueryResult};
use crate::engine::{AppContext, BookingForm, BookingSnapshot, PollOutcome, RailController, RouteForm};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::AppClock;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Form contents kept across restarts
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PersistedForms {
    pub booking: BookingForm,
    pub route: RouteForm,
}

pub struct RailConsoleApp {
    pub(super) controller: RailController,
    pub(super) forms: PersistedForms,
    pub(super) clock: AppClock,

    // Poll cycles may overlap, so several can be in flight
    pub(super) poll_promises: Vec<Promise<PollOutcome>>,
    pub(super) sync_promises: Vec<Promise<BookingSnapshot>>,
    pub(super) booking_promise: Option<Promise<Result<BookingReceipt, ServiceError>>>,
    pub(super) route_promise: Option<Promise<Result<RouteQueryResult, ServiceError>>>,
    pub(super) process_promise: Option<Promise<Result<ProcessOutcome, ServiceError>>>,
}

impl RailConsoleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, ctx: AppContext) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let forms: PersistedForms = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        log::info!(
            "🚆 Rail console starting as {} ({} stations, {} routes)",
            ctx.role,
            ctx.graph.station_count(),
            ctx.graph.routes().len()
        );

        Self {
            controller: RailController::new(ctx),
            forms,
            clock: AppClock::start(),
            poll_promises: Vec::new(),
            sync_promises: Vec::new(),
            booking_promise: None,
            route_promise: None,
            process_promise: None,
        }
    }

    /// Clears the session marker and closes the window
    pub(super) fn logout(&mut self, ctx: &egui::Context) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Logout requested");
        }

        let path = &self.controller.context().session_path;
        if let Err(e) = clear_session(path) {
            log::error!("⚠️  Failed to clear session: {:#}", e);
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn has_work_in_flight(&self) -> bool {
        !self.poll_promises.is_empty()
            || !self.sync_promises.is_empty()
            || self.booking_promise.is_some()
            || self.route_promise.is_some()
            || self.process_promise.is_some()
    }

    /// Keeps frames coming while anything is pending, otherwise sleeps until the next poll.
    fn schedule_repaint(&self, ctx: &egui::Context, now_ms: u64) {
        if self.has_work_in_flight() {
            ctx.request_repaint();
            return;
        }
        let next_animation = self.controller.animator().next_due_ms();
        let next_wake = next_animation
            .map_or(self.controller.next_poll_ms(), |due| due.min(self.controller.next_poll_ms()));
        let wait = next_wake.saturating_sub(now_ms);
        ctx.request_repaint_after(std::time::Duration::from_millis(wait));
    }
}

impl eframe::App for RailConsoleApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop outstanding promises before the runtime goes away
        self.poll_promises.clear();
        self.sync_promises.clear();
        self.booking_promise = None;
        self.route_promise = None;
        self.process_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.forms);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now_ms = self.clock.now_ms();

        self.poll_background_tasks(now_ms);
        if self.controller.poll_due(now_ms) {
            self.start_poll_cycle();
        }
        self.controller.tick(now_ms);

        self.render_top_panel(ctx);
        self.render_side_panel(ctx, now_ms);
        self.render_central_panel(ctx);
        self.render_notices_window(ctx);

        self.schedule_repaint(ctx, now_ms);
    }
}
