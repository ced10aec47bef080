use serde::{Deserialize, Serialize};

use crate::domain::station::StationId;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Completed,
}

/// Read-only snapshot of a booking owned by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: u64,
    pub name: String,
    pub from: StationId,
    pub to: StationId,
    pub status: BookingStatus,
    /// Unix seconds at which the service queued the booking, when reported
    pub timestamp: Option<i64>,
}

impl Booking {
    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }

    pub fn queued_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.timestamp
            .and_then(|secs| chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0))
    }
}

/// A computed path and its cost (minutes or rupees). Request-scoped, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Vec<StationId>,
    pub metric: f64,
}

impl PathResult {
    pub fn new(path: Vec<StationId>, metric: f64) -> Self {
        Self { path, metric }
    }

    /// The service reports an unreachable destination as an empty path with a negative metric
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.metric >= 0.0
    }
}

/// Answer to a route query: the lowest-time and lowest-cost paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQueryResult {
    pub fastest: PathResult,
    pub cheapest: PathResult,
}

/// Validated input for `POST /addBooking`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub from: StationId,
    pub to: StationId,
}

/// Validated input for `GET /findRoute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: StationId,
    pub to: StationId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub id: u64,
}

/// A booking the service just confirmed by processing the queue head.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedBooking {
    pub id: u64,
    pub name: String,
    pub fastest: PathResult,
    pub cheapest: PathResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Confirmed(ProcessedBooking),
    /// Business error reported by the service, e.g. an empty queue
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_path_detection() {
        assert!(PathResult::new(vec![0, 1], 45.0).is_reachable());
        assert!(!PathResult::new(vec![], -1.0).is_reachable());
        assert!(!PathResult::new(vec![], 0.0).is_reachable());
    }

    #[test]
    fn queued_at_converts_unix_seconds() {
        let booking = Booking {
            id: 1,
            name: "Asha".to_string(),
            from: 0,
            to: 1,
            status: BookingStatus::Pending,
            timestamp: Some(1_700_000_000),
        };
        assert_eq!(
            booking.queued_at().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
        assert!(!booking.is_completed());
    }
}
