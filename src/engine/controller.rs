//! The visualization-and-synchronization controller.
//!
//! Owns the drawing surface and the booking list region, and is only touched
//! from the frame loop. Remote calls are split into a `begin_*` step that
//! validates and hands back the request, and a `finish_*` step that folds the
//! answer back in. The UI runs the remote call in between as a promise; the
//! async helpers at the bottom do all three steps inline.

use std::collections::VecDeque;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{BookingService, ServiceError};
use crate::domain::{
    BookingReceipt, BookingRequest, GraphModel, ProcessOutcome, RouteQuery, RouteQueryResult,
    ViewRole,
};
use crate::engine::animator::PathAnimator;
use crate::engine::context::AppContext;
use crate::engine::monitor::{Connectivity, ConnectivityMonitor, PollTimer, ProbeReport, probe};
use crate::engine::requests::{
    BookingForm, RouteForm, RouteKind, RouteResultView, confirmation_text,
};
use crate::engine::sync::{BookingSnapshot, BookingView, SyncController, fetch_snapshot};
use crate::surface::{Surface, SurfaceRenderer};
use crate::ui::config::UI_TEXT;

const MAX_NOTICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user, replacing a modal alert
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// What the caller must do after a request finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Nothing,
    /// Run one sync cycle now instead of waiting for the timer
    Sync,
    /// Clear the booking form, then sync
    ResetFormAndSync,
}

/// Result of one probe-then-fetch cycle, produced off the frame loop
#[derive(Debug, Clone)]
pub struct PollOutcome {
    pub report: ProbeReport,
    /// Present only when the probe succeeded
    pub snapshot: Option<BookingSnapshot>,
}

/// One poll cycle. Booking data is fetched only after a successful probe.
pub async fn run_poll_cycle(service: Arc<dyn BookingService>) -> PollOutcome {
    let report = probe(service.as_ref()).await;
    let snapshot = if report.connectivity == Connectivity::Connected {
        Some(fetch_snapshot(service.as_ref()).await)
    } else {
        None
    };
    PollOutcome { report, snapshot }
}

pub struct RailController {
    ctx: AppContext,
    surface: Surface,
    renderer: SurfaceRenderer,
    animator: PathAnimator,
    monitor: ConnectivityMonitor,
    sync: SyncController,
    poll_timer: PollTimer,
    route_view: Option<RouteResultView>,
    notices: VecDeque<Notice>,
    booking_in_flight: bool,
    route_in_flight: bool,
    process_in_flight: bool,
}

impl RailController {
    /// Draws the graph once and arms the poll timer; the first cycle is due at once.
    pub fn new(ctx: AppContext) -> Self {
        let renderer = SurfaceRenderer::default();
        let surface = renderer.render(&ctx.graph);
        Self {
            surface,
            renderer,
            animator: PathAnimator::new(),
            monitor: ConnectivityMonitor::new(),
            sync: SyncController::new(ctx.role),
            poll_timer: PollTimer::new(ctx.poll_interval_ms),
            route_view: None,
            notices: VecDeque::new(),
            booking_in_flight: false,
            route_in_flight: false,
            process_in_flight: false,
            ctx,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn role(&self) -> ViewRole {
        self.ctx.role
    }

    pub fn graph(&self) -> &GraphModel {
        &self.ctx.graph
    }

    pub fn service(&self) -> Arc<dyn BookingService> {
        Arc::clone(&self.ctx.service)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn animator(&self) -> &PathAnimator {
        &self.animator
    }

    pub fn monitor(&self) -> &ConnectivityMonitor {
        &self.monitor
    }

    pub fn booking_view(&self) -> &BookingView {
        self.sync.view()
    }

    pub fn sync_controller(&self) -> &SyncController {
        &self.sync
    }

    pub fn route_view(&self) -> Option<&RouteResultView> {
        self.route_view.as_ref()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn dismiss_notice(&mut self, index: usize) {
        self.notices.remove(index);
    }

    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }

    pub fn is_booking_in_flight(&self) -> bool {
        self.booking_in_flight
    }

    pub fn is_route_in_flight(&self) -> bool {
        self.route_in_flight
    }

    pub fn is_process_in_flight(&self) -> bool {
        self.process_in_flight
    }

    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            NoticeLevel::Info => log::info!("{}", text),
            NoticeLevel::Warning => log::warn!("{}", text),
            NoticeLevel::Error => log::error!("{}", text),
        }
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice { level, text });
    }

    /// Redraws the surface from the graph, dropping any highlight state.
    pub fn redraw(&mut self) {
        self.renderer.redraw(&mut self.surface, &self.ctx.graph);
    }

    /// Applies due animation steps. Returns how many mutations landed.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.animator.tick(&mut self.surface, now_ms)
    }

    // --- Poll cycle ---

    /// True when the fixed-cadence timer says a new cycle should start.
    /// Cycles still running are not waited for.
    pub fn poll_due(&mut self, now_ms: u64) -> bool {
        self.poll_timer.fire_if_due(now_ms)
    }

    pub fn next_poll_ms(&self) -> u64 {
        self.poll_timer.next_due_ms()
    }

    /// Folds a finished cycle into the monitor and, if connected, the list region.
    pub fn apply_poll(&mut self, outcome: PollOutcome) {
        self.monitor.record(&outcome.report, &self.ctx.graph);
        if let Some(snapshot) = outcome.snapshot {
            self.apply_snapshot(&snapshot);
        }
    }

    /// Replaces the list region, unless the latest probe says we are offline.
    pub fn apply_snapshot(&mut self, snapshot: &BookingSnapshot) {
        if !self.monitor.is_connected() {
            return;
        }
        self.sync.reconcile(snapshot, &self.ctx.graph);
    }

    /// Whether a forced sync would run right now
    pub fn can_sync(&self) -> bool {
        self.monitor.is_connected()
    }

    // --- Booking ---

    /// Validates the form. On failure a notice is raised and nothing is sent.
    pub fn begin_booking(&mut self, form: &BookingForm) -> Option<BookingRequest> {
        if self.booking_in_flight {
            return None;
        }
        match form.validate(&self.ctx.graph) {
            Ok(request) => {
                self.booking_in_flight = true;
                Some(request)
            }
            Err(e) => {
                self.notify(NoticeLevel::Warning, format!("⚠️ {}", e));
                None
            }
        }
    }

    pub fn finish_booking(&mut self, result: Result<BookingReceipt, ServiceError>) -> FollowUp {
        self.booking_in_flight = false;
        match result {
            Ok(receipt) => {
                self.notify(
                    NoticeLevel::Info,
                    format!(
                        "{} {}. {}",
                        UI_TEXT.booking_added_prefix, receipt.id, UI_TEXT.booking_added_suffix
                    ),
                );
                FollowUp::ResetFormAndSync
            }
            Err(e) => {
                self.notify(
                    NoticeLevel::Error,
                    format!("{} {}", UI_TEXT.booking_failed_prefix, e),
                );
                FollowUp::Nothing
            }
        }
    }

    // --- Route query ---

    pub fn begin_route(&mut self, form: &RouteForm) -> Option<RouteQuery> {
        if self.route_in_flight {
            return None;
        }
        match form.validate(&self.ctx.graph) {
            Ok(query) => {
                self.route_in_flight = true;
                Some(query)
            }
            Err(e) => {
                self.notify(NoticeLevel::Warning, format!("⚠️ {}", e));
                None
            }
        }
    }

    /// Shows both results and starts the fastest-path animation at `now_ms`.
    pub fn finish_route(&mut self, result: Result<RouteQueryResult, ServiceError>, now_ms: u64) {
        self.route_in_flight = false;
        match result {
            Ok(route) => {
                let view = RouteResultView::from_result(&route, &self.ctx.graph);
                self.route_view = Some(view);
                self.replay_route(RouteKind::Fastest, now_ms);
            }
            Err(e) => {
                log::error!("Error finding route: {}", e);
                self.route_view = Some(RouteResultView::Error(format!(
                    "{} {}",
                    UI_TEXT.route_error_prefix, e
                )));
            }
        }
    }

    /// Animates one of the displayed results in its own colour.
    /// Returns false when there is nothing to animate.
    pub fn replay_route(&mut self, kind: RouteKind, now_ms: u64) -> bool {
        let Some(entry) = self.route_view.as_ref().and_then(|v| v.entry(kind)) else {
            return false;
        };
        if !entry.reachable {
            return false;
        }
        let path = entry.path.clone();
        let color = entry.color();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Animating {:?} route {:?}", kind, path);
        }

        self.animator.animate(&mut self.surface, &path, color, now_ms);
        true
    }

    // --- Admin processing ---

    /// Only an admin may process, and only one request at a time.
    pub fn begin_process(&mut self) -> bool {
        if !self.ctx.role.is_admin() {
            log::debug!("Ignoring process request from {} view", self.ctx.role);
            return false;
        }
        if self.process_in_flight {
            return false;
        }
        self.process_in_flight = true;
        true
    }

    pub fn finish_process(&mut self, result: Result<ProcessOutcome, ServiceError>) -> FollowUp {
        self.process_in_flight = false;
        match result {
            Ok(ProcessOutcome::Confirmed(booking)) => {
                let text = confirmation_text(&booking, &self.ctx.graph);
                self.notify(NoticeLevel::Info, text);
                FollowUp::Sync
            }
            Ok(ProcessOutcome::Rejected(message)) => {
                self.notify(NoticeLevel::Warning, message);
                FollowUp::Nothing
            }
            Err(e) => {
                self.notify(
                    NoticeLevel::Error,
                    format!("{} {}", UI_TEXT.process_failed_prefix, e),
                );
                FollowUp::Nothing
            }
        }
    }

    // --- Inline flows ---

    /// One full poll cycle, awaited in place.
    pub async fn poll_once(&mut self) {
        let report = probe(self.ctx.service.as_ref()).await;
        self.monitor.record(&report, &self.ctx.graph);
        self.sync_now().await;
    }

    /// One sync cycle gated on the last probe. Returns whether it rendered.
    pub async fn sync_now(&mut self) -> bool {
        let service = self.service();
        self.sync
            .sync(service.as_ref(), &self.monitor, &self.ctx.graph)
            .await
    }

    /// Validate, send, and on success reset the form and sync.
    pub async fn submit_booking(&mut self, form: &mut BookingForm) -> bool {
        let Some(request) = self.begin_booking(form) else {
            return false;
        };
        let result = self.service().add_booking(&request).await;
        match self.finish_booking(result) {
            FollowUp::ResetFormAndSync => {
                form.reset();
                self.sync_now().await;
                true
            }
            _ => false,
        }
    }

    pub async fn submit_route_query(&mut self, form: &RouteForm, now_ms: u64) -> bool {
        let Some(query) = self.begin_route(form) else {
            return false;
        };
        let result = self.service().find_route(query).await;
        let ok = result.is_ok();
        self.finish_route(result, now_ms);
        ok
    }

    pub async fn process_next(&mut self) -> bool {
        if !self.begin_process() {
            return false;
        }
        let result = self.service().process_next().await;
        match self.finish_process(result) {
            FollowUp::Sync => {
                self.sync_now().await;
                true
            }
            _ => false,
        }
    }
}
