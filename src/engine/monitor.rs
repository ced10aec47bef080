//! Liveness gate for all polling.

use crate::data::{BookingService, RemoteStation};
use crate::domain::GraphModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Connected,
    Disconnected,
}

/// Result of one probe: the status plus whatever station list the service reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub connectivity: Connectivity,
    pub remote_stations: Option<Vec<RemoteStation>>,
}

/// Issues the liveness read. Any transport failure or non-2xx answer is `Disconnected`.
pub async fn probe(service: &dyn BookingService) -> ProbeReport {
    match service.probe().await {
        Ok(remote_stations) => ProbeReport {
            connectivity: Connectivity::Connected,
            remote_stations,
        },
        Err(e) => {
            log::debug!("Probe failed: {}", e);
            ProbeReport {
                connectivity: Connectivity::Disconnected,
                remote_stations: None,
            }
        }
    }
}

/// Remembers the last probe result. It never fetches booking data itself.
#[derive(Debug, Default)]
pub struct ConnectivityMonitor {
    last: Option<Connectivity>,
    consecutive_failures: u32,
    checked_station_list: bool,
}

impl ConnectivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a probe result. Returns true when the status changed.
    pub fn record(&mut self, report: &ProbeReport, graph: &GraphModel) -> bool {
        let changed = self.last != Some(report.connectivity);
        self.last = Some(report.connectivity);

        match report.connectivity {
            Connectivity::Connected => {
                if changed {
                    log::info!("✅ Connected to booking service");
                }
                self.consecutive_failures = 0;
                if !self.checked_station_list {
                    if let Some(remote) = &report.remote_stations {
                        warn_on_station_mismatch(remote, graph);
                        self.checked_station_list = true;
                    }
                }
            }
            Connectivity::Disconnected => {
                if changed {
                    log::warn!("❌ Booking service not reachable");
                }
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            }
        }
        changed
    }

    pub fn status(&self) -> Option<Connectivity> {
        self.last
    }

    /// Only a successful most-recent probe counts; unknown is not connected
    pub fn is_connected(&self) -> bool {
        self.last == Some(Connectivity::Connected)
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}

/// Logs a data-consistency warning for every station the two sides disagree on.
/// Returns the number of mismatches.
pub fn warn_on_station_mismatch(remote: &[RemoteStation], graph: &GraphModel) -> usize {
    let mut mismatches = 0;
    for station in remote {
        match graph.station_name(station.id) {
            Some(name) if name == station.name => {}
            Some(name) => {
                log::warn!(
                    "Station {} is '{}' remotely but '{}' on the map",
                    station.id,
                    station.name,
                    name
                );
                mismatches += 1;
            }
            None => {
                log::warn!(
                    "Remote station {} '{}' is not drawn on the map",
                    station.id,
                    station.name
                );
                mismatches += 1;
            }
        }
    }
    mismatches
}

/// Fixed-cadence timer for the poll cycle. It fires on schedule whether or not
/// the previous cycle has finished.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval_ms: u64,
    next_due_ms: u64,
}

impl PollTimer {
    /// The first cycle is due immediately
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: 0,
        }
    }

    /// True once per elapsed interval. Missed intervals collapse into one firing.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.interval_ms;
        self.next_due_ms += (missed + 1) * self.interval_ms;
        true
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
