//! Boundary to the remote routing/booking service.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    Booking, BookingReceipt, BookingRequest, ProcessOutcome, RouteQuery, RouteQueryResult,
    StationId,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Remote unreachable, connection reset, timeout
    #[error("booking service unreachable: {0}")]
    Transport(String),
    #[error("booking service answered HTTP {0}")]
    Status(u16),
    #[error("unexpected response from booking service: {0}")]
    Decode(String),
}

/// Station entry as listed by the liveness endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteStation {
    pub id: StationId,
    pub name: String,
}

/// Every remote interaction is a single best-effort request; no retries, no rollback.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Lightweight read used as the liveness probe. `Ok(None)` means the
    /// service answered but the station list could not be decoded.
    async fn probe(&self) -> Result<Option<Vec<RemoteStation>>, ServiceError>;

    async fn pending_bookings(&self) -> Result<Vec<Booking>, ServiceError>;

    async fn completed_bookings(&self) -> Result<Vec<Booking>, ServiceError>;

    async fn add_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ServiceError>;

    async fn find_route(&self, query: RouteQuery) -> Result<RouteQueryResult, ServiceError>;

    /// Confirms the booking at the head of the remote queue
    async fn process_next(&self) -> Result<ProcessOutcome, ServiceError>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted in-memory service that records every call.

    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Probe,
        Pending,
        Completed,
        AddBooking(BookingRequest),
        FindRoute(RouteQuery),
        ProcessNext,
    }

    pub(crate) struct ScriptedService {
        pub(crate) online: Mutex<bool>,
        pub(crate) stations: Mutex<Option<Vec<RemoteStation>>>,
        pub(crate) pending: Mutex<Result<Vec<Booking>, ServiceError>>,
        pub(crate) completed: Mutex<Result<Vec<Booking>, ServiceError>>,
        pub(crate) next_booking_id: Mutex<u64>,
        pub(crate) route: Mutex<Result<RouteQueryResult, ServiceError>>,
        pub(crate) process: Mutex<Result<ProcessOutcome, ServiceError>>,
        calls: Mutex<Vec<Call>>,
    }

    impl ScriptedService {
        pub(crate) fn online() -> Self {
            Self {
                online: Mutex::new(true),
                stations: Mutex::new(None),
                pending: Mutex::new(Ok(Vec::new())),
                completed: Mutex::new(Ok(Vec::new())),
                next_booking_id: Mutex::new(1),
                route: Mutex::new(Err(ServiceError::Status(500))),
                process: Mutex::new(Ok(ProcessOutcome::Rejected(
                    "No pending bookings".to_string(),
                ))),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn offline() -> Self {
            let service = Self::online();
            *service.online.lock().unwrap() = false;
            service
        }

        pub(crate) fn with_pending(self, bookings: Vec<Booking>) -> Self {
            *self.pending.lock().unwrap() = Ok(bookings);
            self
        }

        pub(crate) fn with_completed(self, bookings: Vec<Booking>) -> Self {
            *self.completed.lock().unwrap() = Ok(bookings);
            self
        }

        pub(crate) fn with_route(self, route: RouteQueryResult) -> Self {
            *self.route.lock().unwrap() = Ok(route);
            self
        }

        pub(crate) fn with_process(self, outcome: Result<ProcessOutcome, ServiceError>) -> Self {
            *self.process.lock().unwrap() = outcome;
            self
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: Call) -> Result<(), ServiceError> {
            self.calls.lock().unwrap().push(call);
            if *self.online.lock().unwrap() {
                Ok(())
            } else {
                Err(ServiceError::Transport("connection refused".to_string()))
            }
        }
    }

    #[async_trait]
    impl BookingService for ScriptedService {
        async fn probe(&self) -> Result<Option<Vec<RemoteStation>>, ServiceError> {
            self.record(Call::Probe)?;
            Ok(self.stations.lock().unwrap().clone())
        }

        async fn pending_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
            self.record(Call::Pending)?;
            self.pending.lock().unwrap().clone()
        }

        async fn completed_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
            self.record(Call::Completed)?;
            self.completed.lock().unwrap().clone()
        }

        async fn add_booking(
            &self,
            request: &BookingRequest,
        ) -> Result<BookingReceipt, ServiceError> {
            self.record(Call::AddBooking(request.clone()))?;
            let mut next = self.next_booking_id.lock().unwrap();
            let id = *next;
            *next += 1;
            Ok(BookingReceipt { id })
        }

        async fn find_route(&self, query: RouteQuery) -> Result<RouteQueryResult, ServiceError> {
            self.record(Call::FindRoute(query))?;
            self.route.lock().unwrap().clone()
        }

        async fn process_next(&self) -> Result<ProcessOutcome, ServiceError> {
            self.record(Call::ProcessNext)?;
            self.process.lock().unwrap().clone()
        }
    }
}
