//! Booking snapshot fetch and role-specific list rendering.
//!
//! Every cycle replaces the whole list region; nothing is diffed against the
//! previous view.

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::BookingService;
use crate::domain::{Booking, GraphModel, ViewRole};
use crate::engine::monitor::ConnectivityMonitor;
use crate::ui::config::UI_TEXT;
use crate::utils::app_time::{AppInstant, now};

/// Latest pending/completed collections. A side that failed to load is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSnapshot {
    pub pending: Vec<Booking>,
    pub completed: Vec<Booking>,
    pub pending_failed: bool,
    pub completed_failed: bool,
}

/// Fetches both collections concurrently. Each side fails independently.
pub async fn fetch_snapshot(service: &dyn BookingService) -> BookingSnapshot {
    let (pending, completed) =
        futures::join!(service.pending_bookings(), service.completed_bookings());

    let mut snapshot = BookingSnapshot::default();
    match pending {
        Ok(bookings) => snapshot.pending = bookings,
        Err(e) => {
            log::error!("Error fetching pending bookings: {}", e);
            snapshot.pending_failed = true;
        }
    }
    match completed {
        Ok(bookings) => snapshot.completed = bookings,
        Err(e) => {
            log::error!("Error fetching completed bookings: {}", e);
            snapshot.completed_failed = true;
        }
    }
    snapshot
}

/// One booking as displayed, with station ids already resolved to names.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingLine {
    pub id: u64,
    pub passenger: String,
    pub from_name: String,
    pub to_name: String,
    /// Queue time as `HH:MM:SS` UTC, when the service reported one
    pub queued_at: Option<String>,
}

impl BookingLine {
    fn from_booking(booking: &Booking, graph: &GraphModel) -> Self {
        Self {
            id: booking.id,
            passenger: booking.name.clone(),
            from_name: graph.station_label(booking.from),
            to_name: graph.station_label(booking.to),
            queued_at: booking
                .queued_at()
                .map(|t| t.format("%H:%M:%S").to_string()),
        }
    }

    pub fn journey(&self) -> String {
        format!("{} → {}", self.from_name, self.to_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pending,
    Completed,
    Tickets,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Header { section: Section, text: String },
    /// Admin only. Its action always targets the remote queue head.
    PendingItem(BookingLine),
    CompletedItem(BookingLine),
    /// Passenger only
    ConfirmedTicket(BookingLine),
    EmptyState(String),
}

impl ListEntry {
    pub fn is_item(&self) -> bool {
        matches!(
            self,
            ListEntry::PendingItem(_) | ListEntry::CompletedItem(_) | ListEntry::ConfirmedTicket(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingCounters {
    pub pending: usize,
    pub completed: usize,
    pub stations: usize,
}

/// Rendered content of the booking list region for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingView {
    pub role: ViewRole,
    /// Admin summary counters; passengers never see counts
    pub counters: Option<BookingCounters>,
    pub entries: Vec<ListEntry>,
}

impl BookingView {
    /// The region before the first successful cycle
    pub fn empty(role: ViewRole) -> Self {
        Self {
            role,
            counters: None,
            entries: Vec::new(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.iter().filter(|e| e.is_item())
    }

    pub fn empty_state_messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            ListEntry::EmptyState(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn mentions_booking(&self, id: u64) -> bool {
        self.entries.iter().any(|e| match e {
            ListEntry::PendingItem(line)
            | ListEntry::CompletedItem(line)
            | ListEntry::ConfirmedTicket(line) => line.id == id,
            _ => false,
        })
    }
}

/// Builds the view for `role` from a snapshot.
pub fn render_view(role: ViewRole, snapshot: &BookingSnapshot, graph: &GraphModel) -> BookingView {
    match role {
        ViewRole::Admin => render_admin(snapshot, graph),
        ViewRole::Passenger => render_passenger(snapshot, graph),
    }
}

fn render_admin(snapshot: &BookingSnapshot, graph: &GraphModel) -> BookingView {
    let counters = Some(BookingCounters {
        pending: snapshot.pending.len(),
        completed: snapshot.completed.len(),
        stations: graph.station_count(),
    });
    let mut entries = Vec::new();

    if snapshot.pending.is_empty() && snapshot.completed.is_empty() {
        entries.push(ListEntry::EmptyState(UI_TEXT.admin_empty_state.to_string()));
        return BookingView {
            role: ViewRole::Admin,
            counters,
            entries,
        };
    }

    if !snapshot.pending.is_empty() {
        entries.push(ListEntry::Header {
            section: Section::Pending,
            text: format!(
                "{} ({} {})",
                UI_TEXT.pending_header,
                snapshot.pending.len(),
                UI_TEXT.pending_header_suffix
            ),
        });
        entries.extend(
            snapshot
                .pending
                .iter()
                .map(|b| ListEntry::PendingItem(BookingLine::from_booking(b, graph))),
        );
    }

    if !snapshot.completed.is_empty() {
        entries.push(ListEntry::Header {
            section: Section::Completed,
            text: format!(
                "{} ({} {})",
                UI_TEXT.completed_header,
                snapshot.completed.len(),
                UI_TEXT.completed_header_suffix
            ),
        });
        entries.extend(
            snapshot
                .completed
                .iter()
                .map(|b| ListEntry::CompletedItem(BookingLine::from_booking(b, graph))),
        );
    }

    BookingView {
        role: ViewRole::Admin,
        counters,
        entries,
    }
}

fn render_passenger(snapshot: &BookingSnapshot, graph: &GraphModel) -> BookingView {
    let mut entries = vec![ListEntry::Header {
        section: Section::Tickets,
        text: UI_TEXT.tickets_header.to_string(),
    }];

    if snapshot.completed.is_empty() {
        entries.push(ListEntry::EmptyState(UI_TEXT.tickets_empty_state.to_string()));
    } else {
        entries.extend(
            snapshot
                .completed
                .iter()
                .map(|b| ListEntry::ConfirmedTicket(BookingLine::from_booking(b, graph))),
        );
    }

    BookingView {
        role: ViewRole::Passenger,
        counters: None,
        entries,
    }
}

/// Owns the booking list region and reconciles it from each snapshot.
#[derive(Debug)]
pub struct SyncController {
    role: ViewRole,
    view: BookingView,
    cycles: u64,
    last_synced_at: Option<AppInstant>,
}

impl SyncController {
    pub fn new(role: ViewRole) -> Self {
        Self {
            role,
            view: BookingView::empty(role),
            cycles: 0,
            last_synced_at: None,
        }
    }

    /// Replaces the region with the view of `snapshot`
    pub fn reconcile(&mut self, snapshot: &BookingSnapshot, graph: &GraphModel) -> &BookingView {
        self.view = render_view(self.role, snapshot, graph);
        self.cycles += 1;
        self.last_synced_at = Some(now());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_poll_cycles {
            log::info!(
                "Sync #{}: {} pending, {} completed ({} entries rendered)",
                self.cycles,
                snapshot.pending.len(),
                snapshot.completed.len(),
                self.view.entries.len()
            );
        }

        &self.view
    }

    /// Fetches and reconciles, but only when the last probe succeeded.
    /// Returns whether a render happened.
    pub async fn sync(
        &mut self,
        service: &dyn BookingService,
        monitor: &ConnectivityMonitor,
        graph: &GraphModel,
    ) -> bool {
        if !monitor.is_connected() {
            return false;
        }
        let snapshot = fetch_snapshot(service).await;
        self.reconcile(&snapshot, graph);
        true
    }

    pub fn view(&self) -> &BookingView {
        &self.view
    }

    pub fn role(&self) -> ViewRole {
        self.role
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn last_synced_at(&self) -> Option<AppInstant> {
        self.last_synced_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ServiceError;
    use crate::data::service::fake::{Call, ScriptedService};
    use crate::domain::BookingStatus;
    use crate::engine::monitor::{Connectivity, ProbeReport};

    fn booking(id: u64, name: &str, from: usize, to: usize, status: BookingStatus) -> Booking {
        Booking {
            id,
            name: name.to_string(),
            from,
            to,
            status,
            timestamp: None,
        }
    }

    #[test]
    fn line_carries_queue_time() {
        let graph = GraphModel::default_network();
        let mut b = booking(2, "Asha", 3, 4, BookingStatus::Pending);
        b.timestamp = Some(3_723);
        let line = BookingLine::from_booking(&b, &graph);
        assert_eq!(line.queued_at.as_deref(), Some("01:02:03"));
        assert_eq!(line.journey(), "Mumbai → Pune");
    }

    fn connected_monitor(graph: &GraphModel) -> ConnectivityMonitor {
        let mut monitor = ConnectivityMonitor::new();
        monitor.record(
            &ProbeReport {
                connectivity: Connectivity::Connected,
                remote_stations: None,
            },
            graph,
        );
        monitor
    }

    fn mixed_snapshot() -> BookingSnapshot {
        BookingSnapshot {
            pending: vec![
                booking(4, "Ravi", 0, 3, BookingStatus::Pending),
                booking(5, "Isha", 2, 5, BookingStatus::Pending),
            ],
            completed: vec![booking(1, "Meera", 1, 4, BookingStatus::Completed)],
            ..Default::default()
        }
    }

    #[test]
    fn passenger_never_sees_pending() {
        let graph = GraphModel::default_network();
        let view = render_view(ViewRole::Passenger, &mixed_snapshot(), &graph);

        assert_eq!(view.counters, None);
        assert!(!view.mentions_booking(4));
        assert!(!view.mentions_booking(5));
        assert!(view.mentions_booking(1));
        assert!(
            view.entries
                .iter()
                .all(|e| !matches!(e, ListEntry::PendingItem(_) | ListEntry::CompletedItem(_)))
        );

        let only_pending = BookingSnapshot {
            pending: mixed_snapshot().pending,
            ..Default::default()
        };
        let view = render_view(ViewRole::Passenger, &only_pending, &graph);
        assert_eq!(view.items().count(), 0);
        assert_eq!(view.empty_state_messages().count(), 1);
    }

    #[test]
    fn admin_empty_shows_single_message() {
        let graph = GraphModel::default_network();
        let view = render_view(ViewRole::Admin, &BookingSnapshot::default(), &graph);

        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.empty_state_messages().count(), 1);
        assert_eq!(view.items().count(), 0);
        assert_eq!(
            view.counters,
            Some(BookingCounters {
                pending: 0,
                completed: 0,
                stations: 8
            })
        );
    }

    #[test]
    fn admin_lists_both_sections_in_order() {
        let graph = GraphModel::default_network();
        let view = render_view(ViewRole::Admin, &mixed_snapshot(), &graph);

        assert_eq!(
            view.counters,
            Some(BookingCounters {
                pending: 2,
                completed: 1,
                stations: 8
            })
        );
        assert!(matches!(
            &view.entries[0],
            ListEntry::Header { section: Section::Pending, .. }
        ));
        match &view.entries[1] {
            ListEntry::PendingItem(line) => {
                assert_eq!(line.id, 4);
                assert_eq!(line.journey(), "Delhi → Mumbai");
            }
            other => panic!("unexpected entry {:?}", other),
        }
        assert!(matches!(&view.entries[2], ListEntry::PendingItem(l) if l.id == 5));
        assert!(matches!(
            &view.entries[3],
            ListEntry::Header { section: Section::Completed, .. }
        ));
        assert!(matches!(&view.entries[4], ListEntry::CompletedItem(l) if l.passenger == "Meera"));
        assert_eq!(view.empty_state_messages().count(), 0);
    }

    #[test]
    fn unknown_station_renders_placeholder() {
        let graph = GraphModel::default_network();
        let snapshot = BookingSnapshot {
            completed: vec![booking(9, "Zoya", 0, 40, BookingStatus::Completed)],
            ..Default::default()
        };
        let view = render_view(ViewRole::Passenger, &snapshot, &graph);
        match view.items().next() {
            Some(ListEntry::ConfirmedTicket(line)) => assert_eq!(line.to_name, "Station #40"),
            other => panic!("unexpected entry {:?}", other),
        }
    }

    #[tokio::test]
    async fn partial_failure_yields_empty_side() {
        let service = ScriptedService::online()
            .with_completed(vec![booking(1, "Meera", 1, 4, BookingStatus::Completed)]);
        *service.pending.lock().unwrap() = Err(ServiceError::Status(500));

        let snapshot = fetch_snapshot(&service).await;
        assert!(snapshot.pending_failed);
        assert!(snapshot.pending.is_empty());
        assert!(!snapshot.completed_failed);
        assert_eq!(snapshot.completed.len(), 1);

        let graph = GraphModel::default_network();
        let view = render_view(ViewRole::Admin, &snapshot, &graph);
        assert_eq!(view.counters.map(|c| c.pending), Some(0));
        assert_eq!(view.items().count(), 1);
    }

    #[tokio::test]
    async fn sync_is_gated_on_connectivity() {
        let graph = GraphModel::default_network();
        let service = ScriptedService::online().with_pending(mixed_snapshot().pending);
        let mut controller = SyncController::new(ViewRole::Admin);

        let unknown = ConnectivityMonitor::new();
        assert!(!controller.sync(&service, &unknown, &graph).await);
        assert!(service.calls().is_empty());
        assert_eq!(controller.cycles(), 0);

        let monitor = connected_monitor(&graph);
        assert!(controller.sync(&service, &monitor, &graph).await);
        let calls = service.calls();
        assert!(calls.contains(&Call::Pending));
        assert!(calls.contains(&Call::Completed));
        assert_eq!(controller.view().items().count(), 2);
        assert!(controller.last_synced_at().is_some());
    }

    #[tokio::test]
    async fn each_cycle_fully_replaces_the_region() {
        let graph = GraphModel::default_network();
        let service = ScriptedService::online().with_pending(mixed_snapshot().pending);
        let monitor = connected_monitor(&graph);
        let mut controller = SyncController::new(ViewRole::Admin);

        controller.sync(&service, &monitor, &graph).await;
        assert!(controller.view().mentions_booking(4));

        *service.pending.lock().unwrap() = Ok(Vec::new());
        controller.sync(&service, &monitor, &graph).await;
        assert!(!controller.view().mentions_booking(4));
        assert_eq!(controller.view().empty_state_messages().count(), 1);
        assert_eq!(controller.cycles(), 2);
    }
}
