//! `reqwest` implementation of [`BookingService`].

use async_trait::async_trait;
use serde::Deserialize;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::NETWORK;
use crate::data::service::{BookingService, RemoteStation, ServiceError};
use crate::domain::{
    Booking, BookingReceipt, BookingRequest, BookingStatus, PathResult, ProcessOutcome,
    ProcessedBooking, RouteQuery, RouteQueryResult, StationId,
};

/// Booking as serialised by the service; the status is implied by `processed`
#[derive(Debug, Deserialize)]
struct WireBooking {
    id: u64,
    name: String,
    from: StationId,
    to: StationId,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    processed: Option<bool>,
}

impl WireBooking {
    fn into_booking(self, listed_as: BookingStatus) -> Booking {
        let status = match self.processed {
            Some(true) => BookingStatus::Completed,
            Some(false) => BookingStatus::Pending,
            None => listed_as,
        };
        Booking {
            id: self.id,
            name: self.name,
            from: self.from,
            to: self.to,
            status,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRoute {
    fastest_path: Vec<StationId>,
    fastest_time: f64,
    cheapest_path: Vec<StationId>,
    cheapest_cost: f64,
}

#[derive(Debug, Deserialize)]
struct WireReceipt {
    id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireProcess {
    Rejected {
        error: String,
    },
    #[serde(rename_all = "camelCase")]
    Confirmed {
        id: u64,
        name: String,
        fastest_path: Vec<StationId>,
        fastest_time: f64,
        cheapest_path: Vec<StationId>,
        cheapest_cost: f64,
    },
}

fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
}

pub(crate) fn decode_bookings(body: &str, listed_as: BookingStatus) -> Result<Vec<Booking>, ServiceError> {
    let wire: Vec<WireBooking> = decode(body)?;
    Ok(wire.into_iter().map(|b| b.into_booking(listed_as)).collect())
}

pub(crate) fn decode_route(body: &str) -> Result<RouteQueryResult, ServiceError> {
    let wire: WireRoute = decode(body)?;
    Ok(RouteQueryResult {
        fastest: PathResult::new(wire.fastest_path, wire.fastest_time),
        cheapest: PathResult::new(wire.cheapest_path, wire.cheapest_cost),
    })
}

pub(crate) fn decode_receipt(body: &str) -> Result<BookingReceipt, ServiceError> {
    let wire: WireReceipt = decode(body)?;
    Ok(BookingReceipt { id: wire.id })
}

pub(crate) fn decode_process(body: &str) -> Result<ProcessOutcome, ServiceError> {
    Ok(match decode::<WireProcess>(body)? {
        WireProcess::Rejected { error } => ProcessOutcome::Rejected(error),
        WireProcess::Confirmed {
            id,
            name,
            fastest_path,
            fastest_time,
            cheapest_path,
            cheapest_cost,
        } => ProcessOutcome::Confirmed(ProcessedBooking {
            id,
            name,
            fastest: PathResult::new(fastest_path, fastest_time),
            cheapest: PathResult::new(cheapest_path, cheapest_cost),
        }),
    })
}

pub struct HttpBookingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookingService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .user_agent(NETWORK.client.user_agent)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and returns the body of a 2xx response
    async fn body(&self, request: reqwest::RequestBuilder) -> Result<String, ServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http_traffic {
            log::info!("<- {} {}", status, body);
        }

        Ok(body)
    }

    async fn get(&self, path: &str) -> Result<String, ServiceError> {
        self.body(self.client.get(self.url(path))).await
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn probe(&self) -> Result<Option<Vec<RemoteStation>>, ServiceError> {
        let body = self.get(NETWORK.endpoints.stations).await?;
        // Any 2xx is a live service; the station list is only a consistency check
        Ok(serde_json::from_str(&body).ok())
    }

    async fn pending_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        let body = self.get(NETWORK.endpoints.pending_bookings).await?;
        decode_bookings(&body, BookingStatus::Pending)
    }

    async fn completed_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        let body = self.get(NETWORK.endpoints.completed_bookings).await?;
        decode_bookings(&body, BookingStatus::Completed)
    }

    async fn add_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ServiceError> {
        let form = [
            ("name", request.name.clone()),
            ("from", request.from.to_string()),
            ("to", request.to.to_string()),
        ];
        let body = self
            .body(self.client.post(self.url(NETWORK.endpoints.add_booking)).form(&form))
            .await?;
        decode_receipt(&body)
    }

    async fn find_route(&self, query: RouteQuery) -> Result<RouteQueryResult, ServiceError> {
        let params = [("from", query.from), ("to", query.to)];
        let body = self
            .body(self.client.get(self.url(NETWORK.endpoints.find_route)).query(&params))
            .await?;
        decode_route(&body)
    }

    async fn process_next(&self) -> Result<ProcessOutcome, ServiceError> {
        let body = self
            .body(self.client.post(self.url(NETWORK.endpoints.process_booking)))
            .await?;
        decode_process(&body)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::engine::monitor::{Connectivity, probe};
    use crate::engine::sync::fetch_snapshot;

    /// Loopback service answering each path with a canned status line and body
    async fn serve(routes: Vec<(&'static str, &'static str, &'static str)>, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]);
                    let path = request
                        .split_whitespace()
                        .nth(1)
                        .and_then(|target| target.split('?').next())
                        .unwrap_or("")
                        .to_string();
                    let (status, body) = routes
                        .iter()
                        .find(|(p, _, _)| *p == path)
                        .map(|(_, status, body)| (*status, *body))
                        .unwrap_or(("404 Not Found", ""));

                    tokio::time::sleep(delay).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn slow_success_still_counts_as_connected() {
        let base = serve(vec![("/stations", "200 OK", "[]")], Duration::from_millis(4_500)).await;
        let service = HttpBookingService::new(base).unwrap();
        assert_eq!(probe(&service).await.connectivity, Connectivity::Connected);
    }

    #[tokio::test]
    async fn non_success_status_is_disconnected() {
        let base = serve(
            vec![("/stations", "503 Service Unavailable", "")],
            Duration::ZERO,
        )
        .await;
        let service = HttpBookingService::new(base).unwrap();
        assert!(matches!(service.probe().await, Err(ServiceError::Status(503))));
        assert_eq!(probe(&service).await.connectivity, Connectivity::Disconnected);
    }

    #[tokio::test]
    async fn server_error_on_pending_leaves_that_side_empty() {
        let base = serve(
            vec![
                ("/pendingBookings", "500 Internal Server Error", ""),
                (
                    "/completedBookings",
                    "200 OK",
                    r#"[{"id":4,"name":"Meera","from":2,"to":5,"processed":true}]"#,
                ),
            ],
            Duration::ZERO,
        )
        .await;
        let service = HttpBookingService::new(base).unwrap();
        let snapshot = fetch_snapshot(&service).await;
        assert!(snapshot.pending_failed);
        assert!(snapshot.pending.is_empty());
        assert!(!snapshot.completed_failed);
        assert_eq!(snapshot.completed.len(), 1);
        assert_eq!(snapshot.completed[0].status, BookingStatus::Completed);
    }

    #[test]
    fn bookings_take_status_from_processed_flag() {
        let body = r#"[
            {"id":1,"name":"Ravi","from":0,"to":3,"timestamp":1700000000,"processed":false},
            {"id":2,"name":"Meera","from":2,"to":5,"timestamp":1700000100,"processed":true}
        ]"#;
        let bookings = decode_bookings(body, BookingStatus::Pending).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].status, BookingStatus::Pending);
        assert_eq!(bookings[1].status, BookingStatus::Completed);
        assert_eq!(bookings[1].timestamp, Some(1_700_000_100));
    }

    #[test]
    fn bookings_without_flag_use_listing() {
        let body = r#"[{"id":7,"name":"Kiran","from":1,"to":4}]"#;
        let bookings = decode_bookings(body, BookingStatus::Completed).unwrap();
        assert_eq!(bookings[0].status, BookingStatus::Completed);
        assert_eq!(bookings[0].timestamp, None);
    }

    #[test]
    fn empty_listing_decodes() {
        assert!(decode_bookings("[]", BookingStatus::Pending).unwrap().is_empty());
    }

    #[test]
    fn route_response_decodes() {
        let body = r#"{"fastestTime":45,"cheapestCost":100,"fastestPath":[0,1],"cheapestPath":[0,1]}"#;
        let route = decode_route(body).unwrap();
        assert_eq!(route.fastest, PathResult::new(vec![0, 1], 45.0));
        assert_eq!(route.cheapest, PathResult::new(vec![0, 1], 100.0));
    }

    #[test]
    fn unreachable_route_decodes_as_unreachable() {
        let body = r#"{"fastestTime":-1,"cheapestCost":-1,"fastestPath":[],"cheapestPath":[]}"#;
        let route = decode_route(body).unwrap();
        assert!(!route.fastest.is_reachable());
        assert!(!route.cheapest.is_reachable());
    }

    #[test]
    fn receipt_ignores_success_flag() {
        let receipt = decode_receipt(r#"{"success":true,"id":12}"#).unwrap();
        assert_eq!(receipt, BookingReceipt { id: 12 });
    }

    #[test]
    fn process_response_variants() {
        let confirmed = r#"{"id":3,"name":"Asha","from":0,"to":3,"fastestTime":600,"cheapestCost":1900,"fastestPath":[0,1,3],"cheapestPath":[0,2,3]}"#;
        match decode_process(confirmed).unwrap() {
            ProcessOutcome::Confirmed(booking) => {
                assert_eq!(booking.id, 3);
                assert_eq!(booking.fastest.path, vec![0, 1, 3]);
                assert_eq!(booking.cheapest.metric, 1900.0);
            }
            other => panic!("expected confirmation, got {:?}", other),
        }

        assert_eq!(
            decode_process(r#"{"error":"No pending bookings"}"#).unwrap(),
            ProcessOutcome::Rejected("No pending bookings".to_string())
        );
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_route("<html>"), Err(ServiceError::Decode(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let service = HttpBookingService::new("http://localhost:8080/").unwrap();
        assert_eq!(service.base_url(), "http://localhost:8080");
        assert_eq!(service.url("/stations"), "http://localhost:8080/stations");
    }
}
